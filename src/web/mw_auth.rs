//! Session-cookie resolution and route protection middleware.

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_cookies::{Cookie, Cookies};

use crate::auth;
use crate::auth::token::SessionClaims;
use crate::prelude::*;

use super::ctx::Ctx;
use super::state::ApiState;

/// The name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Builds the httpOnly session cookie set at login.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, "")).path("/").build()
}

/// Clears the session cookie at logout or on failed resolution.
pub fn clear_session_cookie(cookies: &Cookies) {
    cookies.remove(removal_cookie());
}

/// Middleware resolving the admin request context from the session cookie.
///
/// Stores `Result<Ctx, auth::Error>` in the request extensions so that
/// downstream extractors report the precise failure (missing vs invalid vs
/// expired token). The cookie is cleared whenever resolution fails.
#[axum::debug_middleware]
pub async fn mw_ctx_resolver(
    State(state): State<ApiState>,
    cookies: Cookies,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let ctx = cookies
        .get(TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(auth::error::Error::TokenMissing)
        .and_then(|token| Ok(state.admin_keys.decode::<SessionClaims>(&token)?.claims))
        .map(Ctx::from);

    if ctx.is_err() {
        clear_session_cookie(&cookies);
    }
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// Middleware that requires a resolved context for a route.
pub async fn mw_require_auth(ctx: Result<Ctx>, req: Request, next: Next) -> Result<Response> {
    ctx?;
    Ok(next.run(req).await)
}
