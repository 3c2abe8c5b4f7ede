use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::{
    errors::AuthError,
    server::AppState,
    session, success,
    types::CallbackParams,
    warning,
};

/// `GET /login`: sends the browser to the provider's consent page.
pub async fn login(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let url = match state.spotify.authorize_url() {
        Ok(url) => url,
        Err(e) => {
            warning!("Cannot build authorization URL: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Login is not configured.").into_response();
        }
    };

    let (jar, _) = session::ensure_session(jar, state.sessions.as_ref()).await;
    (jar, Redirect::to(url.as_str())).into_response()
}

/// `GET /callback`: exchanges the one-time code and stores the token.
///
/// The code is used for exactly one exchange in this request. On success a
/// new session replaces the one started at `/login` and holds the token
/// before the redirect to `/profile` is sent. On failure the provider's
/// answer is shown as plain text and the session is left as it was.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
    jar: SignedCookieJar,
) -> Response {
    let result = match (params.error, params.code) {
        (Some(reason), _) => Err(AuthError::Denied(reason)),
        (None, Some(code)) if !code.is_empty() => state.spotify.exchange_code(&code).await,
        _ => Err(AuthError::MissingCode),
    };

    match result {
        Ok(token) => {
            let (jar, id) = session::renew_session(jar, state.sessions.as_ref()).await;
            state.sessions.set_access_token(&id, token.access_token).await;
            success!("Session {:?} authorized", id);
            (jar, Redirect::to("/profile")).into_response()
        }
        Err(e) => {
            warning!("Token error: {}", e);
            (e.status(), format!("Token error: {}", e)).into_response()
        }
    }
}

/// `GET /logout`: destroys the session and returns to the landing page.
pub async fn logout(State(state): State<AppState>, jar: SignedCookieJar) -> impl IntoResponse {
    let jar = session::forget_session(jar, state.sessions.as_ref()).await;
    (jar, Redirect::to("/"))
}
