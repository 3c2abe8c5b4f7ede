use std::{net::SocketAddr, str::FromStr, sync::Arc, time::Duration};

use axum::{Router, extract::FromRef, routing::get};
use axum_extra::extract::cookie::Key;

use crate::{
    Res, api,
    config::Settings,
    info,
    session::{self, MemorySessionStore, SessionStore},
    spotify::SpotifyClient,
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub spotify: SpotifyClient,
    pub sessions: Arc<dyn SessionStore>,
    pub cookie_key: Key,
}

impl AppState {
    /// State with the in-memory session store configured from `settings`.
    pub fn new(settings: &Settings) -> Self {
        let store = MemorySessionStore::new(Duration::from_secs(settings.session_ttl_secs));
        Self::from_parts(
            SpotifyClient::new(settings),
            Arc::new(store),
            &settings.session_secret,
        )
    }

    pub fn from_parts(
        spotify: SpotifyClient,
        sessions: Arc<dyn SessionStore>,
        session_secret: &str,
    ) -> Self {
        Self {
            spotify,
            sessions,
            cookie_key: session::cookie_key(session_secret),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::landing))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/logout", get(api::logout))
        .route("/profile", get(api::profile))
        .route("/playlists", get(api::playlists))
        .route("/MonthlyWrapped", get(api::monthly_wrapped))
        .route("/6MonthsWrapped", get(api::six_months_wrapped))
        .route("/FullWrapped", get(api::full_wrapped))
        .route("/recently-played", get(api::recently_played))
        .with_state(state)
}

/// Binds `address` and serves the application until the process stops.
pub async fn start_api_server(settings: &Settings, address: &str) -> Res<()> {
    let addr = SocketAddr::from_str(address)
        .map_err(|e| format!("Failed to parse server address {}: {}", address, e))?;

    let app = router(AppState::new(settings));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
