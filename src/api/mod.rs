//! # API Module
//!
//! HTTP handlers for every route spotlens serves.
//!
//! ## Routes
//!
//! | Route | Session | Handler |
//! |---|---|---|
//! | `/` | - | [`landing`] |
//! | `/health` | - | [`health`] |
//! | `/login` | created | [`login`] |
//! | `/callback` | created if missing | [`callback`] |
//! | `/profile` | token | [`profile`] |
//! | `/playlists` | token | [`playlists`] |
//! | `/MonthlyWrapped` | token | [`monthly_wrapped`] |
//! | `/6MonthsWrapped` | token | [`six_months_wrapped`] |
//! | `/FullWrapped` | token | [`full_wrapped`] |
//! | `/recently-played` | token | [`recently_played`] |
//! | `/logout` | destroyed | [`logout`] |
//!
//! Handlers marked "token" take a [`BearerToken`], which redirects to
//! `/login` before the handler body runs when the session has no token.
//!
//! ## Failures
//!
//! - Authorization failures answer with `Token error: <provider payload>`
//! - Web API failures are logged and answered with a generic `500` text
//! - Nothing here terminates the process

mod auth;
mod extract;
mod health;
mod views;

pub use auth::{callback, login, logout};
pub use extract::BearerToken;
pub use health::health;
pub use views::{
    full_wrapped, monthly_wrapped, playlists, profile, recently_played, six_months_wrapped,
};

use axum::response::Html;

use crate::render::LANDING_PAGE;

/// `GET /`
pub async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
