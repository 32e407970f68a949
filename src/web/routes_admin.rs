//! `/admin` handlers: login and logout.

use axum::{Json, extract::State};
use tower_cookies::Cookies;

use crate::admin::api::{AdminApi, AdminLoginRequest};
use crate::admin::db::Admin;
use crate::auth::password::is_password_valid;
use crate::auth::token::{Audience, SESSION_TTL, SessionClaims};
use crate::db::connection::DbConnection;
use crate::prelude::*;

use super::mw_auth::{clear_session_cookie, session_cookie};
use super::state::ApiState;

pub async fn login(
    State(state): State<ApiState>,
    cookies: Cookies,
    Json(payload): Json<AdminLoginRequest>,
) -> Result<Json<AdminApi>> {
    let payload = payload.sanitize();
    payload.validate()?;

    let admin = authenticate(&payload, &state.connection)?;
    let claims = SessionClaims::new(admin.id, Audience::Admin, &admin.username, SESSION_TTL)?;
    let token = state.admin_keys.encode(&claims)?;
    cookies.add(session_cookie(token));

    Ok(Json(admin.into()))
}

/// Behind `mw_require_auth`; reaching here means the cookie verified.
pub async fn logout(cookies: Cookies) -> &'static str {
    clear_session_cookie(&cookies);
    "Logout successful"
}

/// Unknown username and wrong password collapse into the same
/// [`Error::WrongCredentials`] response.
fn authenticate(auth: &AdminLoginRequest, connection: &DbConnection) -> Result<Admin> {
    let admin =
        Admin::fetch_by_username(&auth.username, connection)?.ok_or(Error::WrongCredentials)?;
    let is_valid = is_password_valid(&auth.password, &admin.password_hash)?;
    if !is_valid {
        return Err(Error::WrongCredentials);
    }
    Ok(admin)
}
