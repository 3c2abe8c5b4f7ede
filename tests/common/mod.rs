// Shared fixtures: a fake Spotify (accounts service + Web API) served by axum
// on an ephemeral port, and helpers to drive the spotlens router.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use axum::{
    Form, Json, Router,
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, Response, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use spotlens::{
    config::Settings,
    server::{self, AppState},
    session::MemorySessionStore,
    spotify::SpotifyClient,
    utils,
};
use tower::ServiceExt;

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const GOOD_CODE: &str = "good-code";
pub const ACCESS_TOKEN: &str = "access-123";
/// Code the fake token endpoint answers with `200 OK` and a non-JSON body.
pub const GARBLED_CODE: &str = "garbled-code";

#[derive(Clone, Default)]
pub struct FakeSpotify {
    requests: Arc<Mutex<Vec<String>>>,
    fail_resources: Arc<AtomicBool>,
    fail_artists: Arc<AtomicBool>,
}

impl FakeSpotify {
    /// Every request the fake received, as `METHOD path?query`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn fail_resources(&self, fail: bool) {
        self.fail_resources.store(fail, Ordering::SeqCst);
    }

    pub fn fail_artists(&self, fail: bool) {
        self.fail_artists.store(fail, Ordering::SeqCst);
    }

    fn record(&self, req: &Request) {
        let uri = req.uri();
        let path = uri
            .path_and_query()
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());
        self.requests
            .lock()
            .unwrap()
            .push(format!("{} {}", req.method(), path));
    }
}

pub struct TestApp {
    pub router: Router,
    pub fake: FakeSpotify,
    pub addr: SocketAddr,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Like [`spawn_app`], with a chance to point settings elsewhere first.
pub async fn spawn_app_with<F>(adjust: F) -> TestApp
where
    F: FnOnce(&mut Settings),
{
    let fake = FakeSpotify::default();
    let addr = spawn_fake_spotify(fake.clone()).await;
    let mut settings = settings_for(addr);
    adjust(&mut settings);
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let state = AppState::from_parts(
        SpotifyClient::with_http(http, &settings),
        Arc::new(MemorySessionStore::new(Duration::from_secs(60))),
        &settings.session_secret,
    );
    let router = server::router(state);
    TestApp { router, fake, addr }
}

pub fn settings_for(addr: SocketAddr) -> Settings {
    let vars: HashMap<&str, String> = HashMap::from([
        ("SPOTIFY_CLIENT_ID", CLIENT_ID.to_string()),
        ("SPOTIFY_CLIENT_SECRET", CLIENT_SECRET.to_string()),
        (
            "SPOTIFY_REDIRECT_URI",
            "http://127.0.0.1:3000/callback".to_string(),
        ),
        ("SESSION_SECRET", "a session secret used in tests".to_string()),
        ("SPOTIFY_API_AUTH_URL", format!("http://{}/authorize", addr)),
        ("SPOTIFY_API_TOKEN_URL", format!("http://{}/api/token", addr)),
        ("SPOTIFY_API_URL", format!("http://{}/v1", addr)),
    ]);
    Settings::from_lookup(|name| vars.get(name).cloned()).unwrap()
}

impl TestApp {
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// Runs `/callback` with a valid code and returns the session cookie.
    pub async fn sign_in(&self) -> String {
        let res = self
            .get(&format!("/callback?code={}", GOOD_CODE), None)
            .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        session_cookie(&res).expect("callback sets a session cookie")
    }
}

/// The `name=value` part of the session `Set-Cookie` header, if any.
pub fn session_cookie(res: &Response<Body>) -> Option<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("spotlens.sid="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn location(res: &Response<Body>) -> String {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_text(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// An address nothing listens on: bound once, then released.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn spawn_fake_spotify(fake: FakeSpotify) -> SocketAddr {
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/me", get(me))
        .route("/v1/me/playlists", get(playlists))
        .route("/v1/me/top/tracks", get(top_tracks))
        .route("/v1/me/top/artists", get(top_artists))
        .route("/v1/me/player/recently-played", get(recently_played))
        .layer(axum::middleware::from_fn_with_state(fake.clone(), record))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn record(
    State(fake): State<FakeSpotify>,
    req: Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    fake.record(&req);
    next.run(req).await
}

async fn token(
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> axum::response::Response {
    if form.get("code").map(String::as_str) == Some(GARBLED_CODE) {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }

    let expected = utils::basic_auth_header(CLIENT_ID, CLIENT_SECRET);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());

    let valid = authorized
        && form.get("grant_type").map(String::as_str) == Some("authorization_code")
        && form.get("code").map(String::as_str) == Some(GOOD_CODE)
        && form.get("redirect_uri").is_some();

    if !valid {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid authorization code"
            })),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "Bearer",
            "scope": "user-read-email user-top-read",
            "expires_in": 3600,
            "refresh_token": "refresh-456"
        })),
    )
        .into_response()
}

fn guard(fake: &FakeSpotify, headers: &HeaderMap) -> Option<(StatusCode, Json<Value>)> {
    let bearer = format!("Bearer {}", ACCESS_TOKEN);
    if headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(bearer.as_str()) {
        return Some((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"status": 401, "message": "Invalid access token"}})),
        ));
    }
    if fake.fail_resources.load(Ordering::SeqCst) {
        return Some((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": {"status": 500, "message": "Server error"}})),
        ));
    }
    None
}

async fn me(State(fake): State<FakeSpotify>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(err) = guard(&fake, &headers) {
        return err;
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": "jane",
            "display_name": "Jane <Doe>",
            "email": "jane@example.com",
            "country": "DE",
            "images": [{"url": "https://i.scdn.co/image/jane", "height": 300, "width": 300}]
        })),
    )
}

async fn playlists(State(fake): State<FakeSpotify>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(err) = guard(&fake, &headers) {
        return err;
    }
    (
        StatusCode::OK,
        Json(json!({
            "items": [
                {"id": "p1", "name": "Road Trip", "tracks": {"total": 42},
                 "images": [{"url": "https://i.scdn.co/image/p1"}]},
                {"id": "p2", "name": "Empty", "tracks": {"total": 0}, "images": null},
                {"id": "p3", "name": "Focus", "tracks": {"total": 7}, "images": []}
            ],
            "total": 3
        })),
    )
}

pub fn track_json(n: usize, with_image: bool) -> Value {
    let images = if with_image {
        json!([{"url": format!("https://i.scdn.co/image/album-{}", n)}])
    } else {
        json!([])
    };
    json!({
        "id": format!("t{}", n),
        "name": format!("Song {}", n),
        "artists": [{"id": "a1", "name": "Artist One"}, {"id": "a2", "name": "Artist Two"}],
        "album": {"id": format!("al{}", n), "name": format!("Album {}", n), "images": images}
    })
}

async fn top_tracks(State(fake): State<FakeSpotify>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(err) = guard(&fake, &headers) {
        return err;
    }
    let items: Vec<Value> = (0..10).map(|n| track_json(n, true)).collect();
    (StatusCode::OK, Json(json!({ "items": items, "total": 10 })))
}

async fn top_artists(State(fake): State<FakeSpotify>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(err) = guard(&fake, &headers) {
        return err;
    }
    if fake.fail_artists.load(Ordering::SeqCst) {
        return (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": {"status": 502, "message": "Bad gateway"}})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "items": [
                {"id": "a1", "name": "Artist One", "genres": ["pop"],
                 "images": [{"url": "https://i.scdn.co/image/a1"}]},
                {"id": "a2", "name": "Artist Two", "genres": [], "images": []}
            ],
            "total": 2
        })),
    )
}

async fn recently_played(State(fake): State<FakeSpotify>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(err) = guard(&fake, &headers) {
        return err;
    }
    (
        StatusCode::OK,
        Json(json!({
            "items": [
                {"track": track_json(1, true), "played_at": "2024-03-05T18:42:10.123Z"},
                {"track": track_json(2, false), "played_at": "2024-03-05T17:01:00Z"}
            ]
        })),
    )
}
