//! Cookie-token session store and the authenticated-user extractor.
//!
//! Sessions live in process memory: a random token handed out as an
//! HttpOnly cookie maps to the user it was issued for. Restarting the
//! server logs everyone out, which is acceptable for a self-hosted
//! single-instance deployment and avoids persisting tokens next to the
//! data they guard.

use super::state::SharedState;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::response::Redirect;
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "doable_session";

/// The user a session resolves to.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

/// In-memory token-to-user map.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, AuthUser>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token for a user.
    pub fn create(&self, id: i64, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.lock().insert(
            token.clone(),
            AuthUser {
                id,
                username: username.to_string(),
            },
        );
        token
    }

    /// Resolves a token to its user, if the session is live.
    pub fn resolve(&self, token: &str) -> Option<AuthUser> {
        self.sessions.lock().get(token).cloned()
    }

    /// Drops a session. Unknown tokens are ignored.
    pub fn revoke(&self, token: &str) {
        self.sessions.lock().remove(token);
    }
}

/// Builds the Set-Cookie value for a fresh session token.
pub fn session_cookie(token: &str) -> String {
    format!("{}={}; HttpOnly; SameSite=Lax; Path=/", SESSION_COOKIE, token)
}

/// Set-Cookie value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0", SESSION_COOKIE)
}

/// Extracts the session token from a request's Cookie headers.
pub fn token_from_parts(parts: &Parts) -> Option<String> {
    for value in parts.headers.get_all(COOKIE) {
        let raw = match value.to_str() {
            Ok(raw) => raw,
            Err(_) => continue,
        };
        for pair in raw.split(';') {
            let mut split = pair.trim().splitn(2, '=');
            if split.next() == Some(SESSION_COOKIE) {
                if let Some(token) = split.next() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}

#[async_trait]
impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = Redirect;

    /// Requests without a live session are redirected to the login page.
    async fn from_request_parts(parts: &mut Parts, state: &SharedState) -> Result<Self, Self::Rejection> {
        token_from_parts(parts)
            .and_then(|token| state.sessions.resolve(&token))
            .ok_or_else(|| Redirect::to("/login"))
    }
}
