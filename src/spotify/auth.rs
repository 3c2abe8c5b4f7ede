use reqwest::{Url, header::AUTHORIZATION};

use crate::{
    config::SPOTIFY_API_AUTH_URL,
    errors::{AuthError, ConfigError},
    types::TokenResponse,
    utils,
};

use super::SpotifyClient;

/// Read permissions requested on every login.
pub const SCOPES: [&str; 6] = [
    "user-read-email",
    "user-read-private",
    "user-top-read",
    "playlist-read-private",
    "user-library-read",
    "user-read-recently-played",
];

impl SpotifyClient {
    /// Returns the URL of the provider's consent page.
    ///
    /// The query carries `response_type=code`, the client id, the
    /// space-separated [`SCOPES`], the redirect URI and `show_dialog=true`, so
    /// the user is asked for consent on every login.
    pub fn authorize_url(&self) -> Result<Url, ConfigError> {
        let scope = SCOPES.join(" ");
        Url::parse_with_params(
            &self.auth_url,
            &[
                ("response_type", "code"),
                ("client_id", self.client_id.as_str()),
                ("scope", scope.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("show_dialog", "true"),
            ],
        )
        .map_err(|_| ConfigError::Invalid {
            name: SPOTIFY_API_AUTH_URL,
            value: self.auth_url.clone(),
        })
    }

    /// Exchanges a one-time authorization code for a bearer token.
    ///
    /// The client authenticates with HTTP Basic credentials. A non-2xx answer
    /// is returned as [`AuthError::Rejected`] with the provider's body kept
    /// verbatim.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthError> {
        let res = self
            .http
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(&self.client_id, &self.client_secret),
            )
            .form(&[
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(AuthError::Rejected { status, body });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::Malformed(e.to_string()))?;
        if token.access_token.is_empty() {
            return Err(AuthError::Malformed("empty access_token".to_string()));
        }

        Ok(token)
    }
}
