//! # Spotify Integration Module
//!
//! Thin client for the two Spotify services spotlens talks to:
//!
//! ```text
//! Handlers (api)
//!      ↓
//! SpotifyClient
//!     ├── auth       authorize URL, code-for-token exchange (accounts service)
//!     └── resources  read-only GETs with a bearer token (Web API)
//!      ↓
//! reqwest
//! ```
//!
//! The client never retries and never refreshes tokens. Every method maps to
//! exactly one outbound request, and its error is handed back to the caller
//! untouched.
//!
//! The client secret is only ever sent in the `Authorization` header of the
//! server-to-server token request.

mod auth;
mod resources;

pub use auth::SCOPES;
pub use resources::{RECENTLY_PLAYED_LIMIT, TOP_ITEMS_LIMIT};

use reqwest::Client;

use crate::config::Settings;

#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    auth_url: String,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(settings: &Settings) -> Self {
        Self::with_http(Client::new(), settings)
    }

    /// Builds a client on top of an existing `reqwest::Client`.
    pub fn with_http(http: Client, settings: &Settings) -> Self {
        Self {
            http,
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            redirect_uri: settings.redirect_uri.clone(),
            auth_url: settings.auth_url.clone(),
            token_url: settings.token_url.clone(),
            api_url: settings.api_url.clone(),
        }
    }
}
