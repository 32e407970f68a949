//! Session claims and token response body.

use chrono::{TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TOKEN_TYPE;
use super::error::{Error, Result};

/// How long an issued session stays valid.
pub const SESSION_TTL: TimeDelta = TimeDelta::hours(12);

/// Which account table a session token belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Audience {
    User,
    Admin,
}

/// Claims payload embedded in a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (account id).
    pub sub: i32,
    /// Audience the token was issued for.
    pub who: Audience,
    /// Email for users, username for admins.
    pub name: String,
    /// Issued at time.
    pub iat: i64,
    /// Expiration time.
    pub exp: i64,
    /// Token ID.
    pub jti: Uuid,
}

impl SessionClaims {
    /// Creates claims for a session lasting `ttl` from now.
    pub fn new(id: i32, who: Audience, name: impl Into<String>, ttl: TimeDelta) -> Result<Self> {
        let now = Utc::now();
        let expiration = now.checked_add_signed(ttl).ok_or(Error::TokenLifetime)?;

        Ok(Self {
            sub: id,
            who,
            name: name.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4(),
        })
    }
}

/// Session response with the issued token.
///
/// # JSON Format
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "Bearer"
/// }
/// ```
#[derive(Debug, Deserialize, Serialize)]
pub struct SessionBody {
    /// The session token, also set as the `token` cookie.
    pub access_token: String,
    /// The token type (always "Bearer").
    pub token_type: String,
}

impl SessionBody {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: String::from(TOKEN_TYPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_follows_issue_time() {
        let claims = SessionClaims::new(1, Audience::Admin, "admin", SESSION_TTL).unwrap();
        assert_eq!(claims.exp - claims.iat, SESSION_TTL.num_seconds());
    }

    #[test]
    fn each_session_gets_a_fresh_token_id() {
        let first = SessionClaims::new(1, Audience::User, "a@a.com", SESSION_TTL).unwrap();
        let second = SessionClaims::new(1, Audience::User, "a@a.com", SESSION_TTL).unwrap();
        assert_ne!(first.jti, second.jti);
    }
}
