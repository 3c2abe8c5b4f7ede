use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

use super::{SessionId, SessionStore};

/// Name of the cookie carrying the session identifier.
pub const SESSION_COOKIE: &str = "spotlens.sid";

/// Derives the cookie signing key from the configured session secret.
///
/// The secret may have any length; its SHA-512 digest provides the 64 bytes
/// of key material the signed jar needs.
pub fn cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Reads the session identifier from a verified cookie, if any.
pub fn current_session(jar: &SignedCookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| SessionId::parse(cookie.value()))
}

/// Returns the browser's live session, creating one if needed.
///
/// The returned jar carries the `Set-Cookie` for a newly created session and
/// must be part of the response.
pub async fn ensure_session(
    jar: SignedCookieJar,
    store: &dyn SessionStore,
) -> (SignedCookieJar, SessionId) {
    if let Some(id) = current_session(&jar) {
        if store.exists(&id).await {
            return (jar, id);
        }
    }

    issue(jar, store).await
}

/// Replaces the browser's session with a brand new one.
///
/// The previous session, if any, is destroyed, so an identifier handed out
/// before authentication is never the one that ends up holding a token.
pub async fn renew_session(
    jar: SignedCookieJar,
    store: &dyn SessionStore,
) -> (SignedCookieJar, SessionId) {
    if let Some(old) = current_session(&jar) {
        store.destroy(&old).await;
    }
    issue(jar, store).await
}

async fn issue(jar: SignedCookieJar, store: &dyn SessionStore) -> (SignedCookieJar, SessionId) {
    let id = store.create().await;
    let cookie = Cookie::build((SESSION_COOKIE, id.as_str().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), id)
}

/// Destroys the browser's session and removes its cookie.
pub async fn forget_session(jar: SignedCookieJar, store: &dyn SessionStore) -> SignedCookieJar {
    if let Some(id) = current_session(&jar) {
        store.destroy(&id).await;
    }
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
