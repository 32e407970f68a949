//! `/users` handlers: sign-up and sign-in.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tower_cookies::Cookies;

use crate::auth::password::{generate_password_hash, is_password_valid};
use crate::auth::token::{Audience, SESSION_TTL, SessionBody, SessionClaims};
use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::user::api::{SignInRequest, SignUpRequest, UserApi};
use crate::user::db::{User, UserCreate};

use super::mw_auth::session_cookie;
use super::state::ApiState;

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
}

async fn sign_up(
    State(state): State<ApiState>,
    Json(payload): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<UserApi>)> {
    let payload = payload.sanitize();
    payload.validate()?;

    // Friendly 409 for the common path; the unique constraint on
    // users.email still catches the concurrent-sign-up race inside create.
    if User::fetch_by_email(&payload.email, &state.connection)?.is_some() {
        return Err(Error::Conflict);
    }

    let password_hash = generate_password_hash(&payload.password)?;
    let user = UserCreate {
        name: payload.name,
        email: payload.email,
        password_hash,
    }
    .create(&state.connection)?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

async fn sign_in(
    State(state): State<ApiState>,
    cookies: Cookies,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<SessionBody>> {
    let payload = payload.sanitize();
    payload.validate()?;

    let user = authenticate(&payload, &state.connection)?;
    let claims = SessionClaims::new(user.id, Audience::User, user.email, SESSION_TTL)?;
    let token = state.user_keys.encode(&claims)?;
    cookies.add(session_cookie(token.clone()));

    Ok(Json(SessionBody::new(token)))
}

/// Checks credentials against the stored account.
///
/// Unknown email and wrong password collapse into the same
/// [`Error::WrongCredentials`] so the response never reveals which half
/// failed.
fn authenticate(auth: &SignInRequest, connection: &DbConnection) -> Result<User> {
    let user = User::fetch_by_email(&auth.email, connection)?.ok_or(Error::WrongCredentials)?;
    let is_valid = is_password_valid(&auth.password, &user.password_hash)?;
    if !is_valid {
        return Err(Error::WrongCredentials);
    }
    Ok(user)
}
