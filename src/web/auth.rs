//! Registration, login, and logout.
//!
//! Passwords are hashed with argon2 and never stored or logged in plain
//! text. A successful login issues an in-memory session token delivered as
//! an HttpOnly cookie; logout revokes the token and clears the cookie.

use super::error::AppError;
use super::session::{clear_session_cookie, session_cookie, SESSION_COOKIE};
use super::state::SharedState;
use crate::db::users::{User, Users};
use crate::libs::forms::{RegisterForm, RegisterFormData};
use crate::libs::messages::Message;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;

/// Hashes a plaintext password with a random salt.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored hash.
///
/// A malformed stored hash counts as a mismatch rather than an error; the
/// caller cannot do anything more useful with the distinction.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginFormData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login_page() -> Json<serde_json::Value> {
    Json(json!({ "title": "Login" }))
}

pub async fn login(State(state): State<SharedState>, Form(data): Form<LoginFormData>) -> Result<Response, AppError> {
    let mut users = Users::new()?;
    let user = users.get_by_username(data.username.trim())?;

    // Same error for unknown user and wrong password
    let user = match user {
        Some(user) if verify_password(&data.password, &user.password_hash) => user,
        _ => return Err(AppError::Auth(Message::InvalidCredentials.to_string())),
    };

    let id = user.id.ok_or_else(|| anyhow::anyhow!("stored user without id"))?;
    let token = state.sessions.create(id, &user.username);

    Ok((AppendHeaders([(SET_COOKIE, session_cookie(&token))]), Redirect::to("/tasks")).into_response())
}

pub async fn logout(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    // Revoke whatever session the cookie carries; a missing cookie is fine.
    if let Some(token) = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .find_map(|pair| {
            let mut split = pair.trim().splitn(2, '=');
            match split.next() {
                Some(name) if name == SESSION_COOKIE => split.next().map(str::to_string),
                _ => None,
            }
        })
    {
        state.sessions.revoke(&token);
        tracing::debug!("{}", Message::LoggedOut);
    }

    (AppendHeaders([(SET_COOKIE, clear_session_cookie())]), Redirect::to("/login")).into_response()
}

pub async fn register_page() -> Json<serde_json::Value> {
    Json(json!({ "title": "Register" }))
}

pub async fn register(State(state): State<SharedState>, Form(data): Form<RegisterFormData>) -> Result<Response, AppError> {
    let fields = match RegisterForm::validate(&data) {
        Ok(fields) => fields,
        Err(errors) => return Err(AppError::Validation(errors)),
    };

    let mut users = Users::new()?;
    if users.get_by_username(&fields.username)?.is_some() {
        let mut errors = crate::libs::forms::FormErrors::default();
        errors.add("username", Message::UsernameTaken(fields.username.clone()));
        return Err(AppError::Validation(errors));
    }

    let user = User {
        id: None,
        username: fields.username.clone(),
        password_hash: hash_password(&fields.password)?,
        email: fields.email,
        first_name: fields.first_name,
        last_name: fields.last_name,
    };
    let id = users.create(&user)?;
    tracing::info!("{}", Message::RegistrationSuccessful(fields.username.clone()));

    // A fresh account goes straight to its task list, already logged in
    let token = state.sessions.create(id, &fields.username);
    Ok((AppendHeaders([(SET_COOKIE, session_cookie(&token))]), Redirect::to("/tasks")).into_response())
}
