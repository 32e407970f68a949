//! Request context for authenticated handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth;
use crate::auth::token::{Audience, SessionClaims};
use crate::prelude::*;

/// Identity attached to a request by the context resolver middleware.
#[derive(Clone, Debug)]
pub struct Ctx {
    /// Authenticated account id.
    pub id: i32,
    /// Audience the session token was issued for.
    pub who: Audience,
}

impl From<SessionClaims> for Ctx {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.sub,
            who: claims.who,
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        Ok(parts
            .extensions
            .get::<core::result::Result<Ctx, auth::error::Error>>()
            .ok_or(Error::CtxMissing)?
            .clone()?)
    }
}
