//! spotlens library
//!
//! A server-side web client for Spotify. The browser signs in through the
//! OAuth 2.0 Authorization Code flow; the resulting bearer token is kept in a
//! server-side session and used to render the user's profile, playlists,
//! top tracks and artists, and recently played songs.
//!
//! # Modules
//!
//! - `api` - axum handlers for every route
//! - `config` - `.env` loading and typed settings
//! - `errors` - configuration, authorization and fetch errors
//! - `render` - typed view-models and HTML templates
//! - `server` - router assembly and the HTTP listener
//! - `session` - session store and signed session cookie
//! - `spotify` - accounts service and Web API client
//! - `types` - data structures for the Spotify JSON payloads
//! - `utils` - small helpers
//!
//! # Example
//!
//! ```
//! use spotlens::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotlens::Res<()> {
//!     config::load_env(None).await?;
//!     let settings = config::Settings::from_env()?;
//!     server::start_api_server(&settings, &settings.server_address).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod render;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias for startup code, where any error ends the process.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// # Example
///
/// ```
/// info!("Server listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a status line prefixed with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Only startup code uses this. Request handlers report failures with
/// [`warning!`] and keep serving.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr.
///
/// Used for request-scoped failures such as a rejected code exchange or a
/// failed Web API call.
///
/// # Example
///
/// ```
/// warning!("Error while loading {}: {}", what, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
