//! Error types for the three ways a request can go wrong: the configuration
//! is incomplete, the authorization code exchange fails, or a resource call
//! to the Web API fails.

use std::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} must be set", name),
            ConfigError::Invalid { name, value } => {
                write!(f, "{} has an invalid value: {:?}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure while turning an authorization code into a bearer token.
#[derive(Debug)]
pub enum AuthError {
    /// The callback carried no `code` query parameter.
    MissingCode,
    /// The provider redirected back with an `error` parameter instead of a code.
    Denied(String),
    /// The token endpoint answered with a non-2xx status. `body` is kept verbatim.
    Rejected { status: StatusCode, body: String },
    Transport(reqwest::Error),
    Malformed(String),
}

impl AuthError {
    /// Status the callback answers with when the exchange fails.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingCode | AuthError::Denied(_) | AuthError::Rejected { .. } => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Transport(_) | AuthError::Malformed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCode => write!(f, "missing authorization code"),
            AuthError::Denied(reason) => write!(f, "authorization denied: {}", reason),
            AuthError::Rejected { body, .. } => write!(f, "{}", body),
            AuthError::Transport(e) => write!(f, "{}", e),
            AuthError::Malformed(reason) => write!(f, "malformed token response: {}", reason),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err)
    }
}

/// Failure of a read-only call against the Web API.
#[derive(Debug)]
pub enum FetchError {
    Upstream { status: StatusCode, body: String },
    Transport(reqwest::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Upstream { status, body } => {
                write!(f, "upstream answered {}: {}", status, body)
            }
            FetchError::Transport(e) => write!(f, "request failed: {}", e),
            FetchError::Decode(e) => write!(f, "unexpected response body: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Upstream { .. } => None,
            FetchError::Transport(e) => Some(e),
            FetchError::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err)
    }
}
