use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    errors::FetchError,
    render::{CollectionPage, ProfileView, Template},
    server::AppState,
    spotify::{RECENTLY_PLAYED_LIMIT, TOP_ITEMS_LIMIT},
    types::TimeRange,
    warning,
};

use super::BearerToken;

// Logged server side; the browser only sees the generic message.
fn failure(what: &str, err: FetchError) -> Response {
    warning!("Error while loading {}: {}", what, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error while loading {}.", what),
    )
        .into_response()
}

/// `GET /profile`
pub async fn profile(State(state): State<AppState>, BearerToken(token): BearerToken) -> Response {
    match state.spotify.current_user(&token).await {
        Ok(user) => Html(ProfileView::from(&user).render()).into_response(),
        Err(e) => failure("profile data", e),
    }
}

/// `GET /playlists`
pub async fn playlists(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Response {
    match state.spotify.my_playlists(&token).await {
        Ok(playlists) => Html(CollectionPage::playlists(&playlists).render()).into_response(),
        Err(e) => failure("the Playlists", e),
    }
}

/// Top tracks then top artists for one window. The artists call is only
/// made once the tracks call succeeded.
async fn wrapped(state: &AppState, token: &str, range: TimeRange) -> Response {
    let tracks = match state
        .spotify
        .top_tracks(token, range, TOP_ITEMS_LIMIT)
        .await
    {
        Ok(tracks) => tracks,
        Err(e) => return failure("Spotify data", e),
    };

    let artists = match state
        .spotify
        .top_artists(token, range, TOP_ITEMS_LIMIT)
        .await
    {
        Ok(artists) => artists,
        Err(e) => return failure("Spotify data", e),
    };

    Html(CollectionPage::wrapped(range, &tracks, &artists).render()).into_response()
}

/// `GET /MonthlyWrapped`
pub async fn monthly_wrapped(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Response {
    wrapped(&state, &token, TimeRange::ShortTerm).await
}

/// `GET /6MonthsWrapped`
pub async fn six_months_wrapped(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Response {
    wrapped(&state, &token, TimeRange::MediumTerm).await
}

/// `GET /FullWrapped`
pub async fn full_wrapped(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Response {
    wrapped(&state, &token, TimeRange::LongTerm).await
}

/// `GET /recently-played`
pub async fn recently_played(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Response {
    match state
        .spotify
        .recently_played(&token, RECENTLY_PLAYED_LIMIT)
        .await
    {
        Ok(history) => Html(CollectionPage::recently_played(&history).render()).into_response(),
        Err(e) => failure("Data from recently played Songs", e),
    }
}
