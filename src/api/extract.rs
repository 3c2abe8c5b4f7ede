use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::{server::AppState, session};

/// Bearer token of the current session.
///
/// Extraction fails with a redirect to `/login` when the browser has no
/// session or the session holds no token, so a protected handler never runs
/// (and never calls the Web API) without one.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = match SignedCookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };

        let Some(id) = session::current_session(&jar) else {
            return Err(Redirect::to("/login"));
        };

        match state.sessions.access_token(&id).await {
            Some(token) => Ok(BearerToken(token)),
            None => Err(Redirect::to("/login")),
        }
    }
}
