//! Configuration management for spotlens.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Variables that are already set in the process environment always win
//! over the file.
//!
//! The file is looked up in this order:
//! 1. An explicit path passed on the command line
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory under `spotlens/`

use std::{env, fmt, path::Path, path::PathBuf};

use crate::errors::ConfigError;

pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const SPOTIFY_REDIRECT_URI: &str = "SPOTIFY_REDIRECT_URI";
pub const SESSION_SECRET: &str = "SESSION_SECRET";
pub const SERVER_ADDRESS: &str = "SERVER_ADDRESS";
pub const SESSION_TTL_SECS: &str = "SESSION_TTL_SECS";
pub const SPOTIFY_API_AUTH_URL: &str = "SPOTIFY_API_AUTH_URL";
pub const SPOTIFY_API_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
pub const SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;
/// Upper bound for `SESSION_TTL_SECS`: one year.
pub const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file.
///
/// When `explicit` is given that file must exist and parse. Otherwise the
/// working directory is tried first and the local data directory second;
/// finding neither is fine, as long as the variables come from the real
/// environment.
///
/// # Directory Structure
///
/// The fallback location is:
/// - Linux: `~/.local/share/spotlens/.env`
/// - macOS: `~/Library/Application Support/spotlens/.env`
/// - Windows: `%LOCALAPPDATA%/spotlens/.env`
///
/// # Errors
///
/// Returns an error if the explicit file cannot be loaded, if the data
/// directory cannot be created, or if a discovered `.env` file fails to parse.
pub async fn load_env(explicit: Option<&Path>) -> Result<Option<PathBuf>, String> {
    if let Some(path) = explicit {
        dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        return Ok(Some(path.to_path_buf()));
    }

    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| e.to_string())?;
        return Ok(Some(local));
    }

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
        return Ok(Some(path));
    }

    Ok(None)
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlens/.env");
    path
}

/// Everything the server needs to know at startup.
#[derive(Clone)]
pub struct Settings {
    pub server_address: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub session_secret: String,
    pub session_ttl_secs: u64,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl Settings {
    /// Reads the settings from the process environment.
    ///
    /// `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`, `SPOTIFY_REDIRECT_URI`
    /// and `SESSION_SECRET` are required. Everything else falls back to the
    /// public Spotify endpoints, port 3000 and a one day session lifetime.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Settings::from_env`] but with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ConfigError::Missing(name)),
            }
        };
        let optional = |name: &'static str, default: &str| -> String {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let session_ttl_secs = match lookup(SESSION_TTL_SECS) {
            Some(value) if !value.trim().is_empty() => match value.trim().parse::<u64>() {
                Ok(secs) if secs <= MAX_SESSION_TTL_SECS => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: SESSION_TTL_SECS,
                        value,
                    });
                }
            },
            _ => DEFAULT_SESSION_TTL_SECS,
        };

        let settings = Self {
            server_address: optional(SERVER_ADDRESS, DEFAULT_SERVER_ADDRESS),
            client_id: required(SPOTIFY_CLIENT_ID)?,
            client_secret: required(SPOTIFY_CLIENT_SECRET)?,
            redirect_uri: required(SPOTIFY_REDIRECT_URI)?,
            session_secret: required(SESSION_SECRET)?,
            session_ttl_secs,
            auth_url: optional(SPOTIFY_API_AUTH_URL, DEFAULT_AUTH_URL),
            token_url: optional(SPOTIFY_API_TOKEN_URL, DEFAULT_TOKEN_URL),
            api_url: optional(SPOTIFY_API_URL, DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
        };

        for (name, value) in [
            (SPOTIFY_API_AUTH_URL, &settings.auth_url),
            (SPOTIFY_API_TOKEN_URL, &settings.token_url),
            (SPOTIFY_API_URL, &settings.api_url),
        ] {
            if reqwest::Url::parse(value).is_err() {
                return Err(ConfigError::Invalid {
                    name,
                    value: value.clone(),
                });
            }
        }

        Ok(settings)
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("server_address", &self.server_address)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("session_secret", &"<redacted>")
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .finish()
    }
}
