use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use rand::{Rng, distr::Alphanumeric};

/// Length of a generated session identifier.
pub const SESSION_ID_LEN: usize = 48;

/// Generates a random session identifier.
///
/// The identifier consists of [`SESSION_ID_LEN`] alphanumeric characters drawn
/// from the thread-local CSPRNG, so it is safe to hand out in a cookie.
///
/// # Example
///
/// ```
/// let id = generate_session_id();
/// assert_eq!(id.len(), 48);
/// ```
pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

/// Builds the value of an HTTP Basic `Authorization` header.
///
/// The token endpoint authenticates the client with `client_id:client_secret`
/// encoded as standard base64 (with padding).
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Formats a `played_at` timestamp as `dd.mm.yy, HH:MM` in UTC.
///
/// Timestamps that are not RFC 3339 are returned unchanged.
pub fn format_played_at(played_at: &str) -> String {
    match DateTime::parse_from_rfc3339(played_at) {
        Ok(ts) => ts.with_timezone(&Utc).format("%d.%m.%y, %H:%M").to_string(),
        Err(_) => played_at.to_string(),
    }
}

/// Escapes text for use inside HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
