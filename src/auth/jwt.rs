//! JWT signing and verification.
//!
//! [`TokenKeys`] wraps the HMAC key pair for one token audience. Keys are
//! built from the configured secret at bootstrap and carried in the router
//! state, so there is no process-global key material.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};

use super::error::{Error, Result};

/// Signing algorithm used for all session tokens.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Cryptographic key pair for signing and verifying session tokens.
#[derive(Clone)]
pub struct TokenKeys {
    /// Key used for signing new tokens.
    encoding: EncodingKey,
    /// Key used for verifying presented tokens.
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Creates a key pair from the provided secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Creates a signed token from the provided claims.
    ///
    /// Claims are signed for integrity, not encrypted; they must carry an
    /// `exp` field for [`decode`](Self::decode) to accept them later.
    pub fn encode<T>(&self, claims: &T) -> Result<String>
    where
        T: Serialize,
    {
        let header = Header::new(ALGORITHM);
        Ok(encode(&header, claims, &self.encoding)?)
    }

    /// Validates a token and extracts its claims.
    ///
    /// Fails with [`Error::TokenExpired`] when the embedded expiry has
    /// passed and [`Error::InvalidToken`] for any signature or payload
    /// problem, including tokens signed with a different secret.
    pub fn decode<T>(&self, token: &str) -> Result<TokenData<T>>
    where
        T: DeserializeOwned,
    {
        decode(token, &self.decoding, &Validation::new(ALGORITHM)).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => Error::TokenExpired,
                _ => Error::InvalidToken,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::{Audience, SessionClaims};
    use chrono::TimeDelta;

    fn keys() -> TokenKeys {
        TokenKeys::new(b"test-secret")
    }

    fn claims() -> SessionClaims {
        SessionClaims::new(1, Audience::User, "test@test.com", TimeDelta::hours(12)).unwrap()
    }

    #[test]
    fn roundtrip_preserves_claims() {
        let claims = claims();
        let token = keys().encode(&claims).unwrap();
        let decoded = keys().decode::<SessionClaims>(&token).unwrap();
        assert_eq!(decoded.claims, claims);
    }

    #[test]
    fn tampered_token_is_invalid() {
        let token = keys().encode(&claims()).unwrap();
        let mut tampered = token.into_bytes();
        let last = tampered.last_mut().unwrap();
        *last = if *last == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        let result = keys().decode::<SessionClaims>(&tampered);
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let token = TokenKeys::new(b"other-secret").encode(&claims()).unwrap();
        let result = keys().decode::<SessionClaims>(&token);
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let result = keys().decode::<SessionClaims>("wrong_token");
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let expired =
            SessionClaims::new(1, Audience::User, "test@test.com", TimeDelta::hours(-2)).unwrap();
        let token = keys().encode(&expired).unwrap();
        let result = keys().decode::<SessionClaims>(&token);
        assert!(matches!(result, Err(Error::TokenExpired)));
    }
}
