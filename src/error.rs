//! Main Crate Error

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] crate::auth::error::Error),

    #[error(transparent)]
    R2D2(#[from] diesel::r2d2::PoolError),

    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),

    /* Api Errors */
    #[error("Unable to process the provided data")]
    Validation,

    #[error("Email already registered")]
    Conflict,

    #[error("Wrong Credentials")]
    WrongCredentials,

    #[error("Not Found")]
    NotFound,

    #[error("Context Missing")]
    CtxMissing,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        let (status, message) = match self {
            Error::Validation => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Unable to process the provided data",
            ),
            Error::Conflict => (StatusCode::CONFLICT, "Email already registered"),
            Error::WrongCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Error::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            Error::CtxMissing => (StatusCode::UNAUTHORIZED, "Missing credentials"),
            Error::Auth(err) => match err {
                crate::auth::error::Error::TokenMissing => {
                    (StatusCode::UNAUTHORIZED, "Token not found")
                }
                crate::auth::error::Error::InvalidToken => {
                    (StatusCode::UNAUTHORIZED, "Invalid token")
                }
                crate::auth::error::Error::TokenExpired => {
                    (StatusCode::UNAUTHORIZED, "Token expired")
                }
                crate::auth::error::Error::TokenCreation(_)
                | crate::auth::error::Error::TokenLifetime
                | crate::auth::error::Error::PasswordHash(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                }
            },
            Error::R2D2(_) | Error::Diesel(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "message": message,
        }));
        (status, body).into_response()
    }
}
