//! # Session Module
//!
//! Server-side session state. The browser only ever holds an opaque,
//! signed session identifier in a cookie; the bearer token stays on the
//! server behind the [`SessionStore`] trait.
//!
//! ## Lifecycle
//!
//! - **Created** when the authorization handshake starts (`/login`), or on
//!   `/callback` if the browser arrives without one
//! - **Renewed** after a successful code exchange: the pre-login session is
//!   destroyed and the token goes into a freshly issued one
//! - **Destroyed** on `/logout`, or implicitly once the store's TTL lapses
//!
//! A restart of the process drops every session; no refresh token is kept.

mod cookie;
mod store;

pub use cookie::{
    SESSION_COOKIE, cookie_key, current_session, ensure_session, forget_session, renew_session,
};
pub use store::{MemorySessionStore, SessionStore};

use std::fmt;

use crate::utils;

/// Opaque identifier of a server-side session.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        SessionId(utils::generate_session_id())
    }

    /// Accepts an identifier read back from a (verified) cookie.
    ///
    /// Returns `None` for values that could never have been issued by
    /// [`SessionId::generate`].
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == utils::SESSION_ID_LEN && raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            Some(SessionId(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep identifiers out of debug logs.
impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({}…)", &self.0[..6.min(self.0.len())])
    }
}
