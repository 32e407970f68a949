//! Wire types for the `/users` endpoints.

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::user::db::User;

/// Passwords shorter than this are rejected at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Normalizes an email for storage and lookup: trimmed and lowercased.
///
/// This pins email matching as case-insensitive without touching the SQL
/// comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_well_formed_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// `POST /users/sign-up` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpRequest {
    /// Trims user-supplied strings and normalizes the email.
    pub fn sanitize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            password: self.password,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty()
            || !is_well_formed_email(&self.email)
            || self.password.len() < MIN_PASSWORD_LEN
        {
            return Err(Error::Validation);
        }
        Ok(())
    }
}

/// `POST /users/sign-in` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn sanitize(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            password: self.password,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_well_formed_email(&self.email) || self.password.is_empty() {
            return Err(Error::Validation);
        }
        Ok(())
    }
}

/// Public view of a user account. Carries neither hash nor plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserApi {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserApi {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up(name: &str, email: &str, password: &str) -> SignUpRequest {
        SignUpRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn canonical_payload_is_valid() {
        let request = sign_up("test", "test@test.com", "123456").sanitize();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn email_lookup_key_is_case_insensitive() {
        assert_eq!(normalize_email("Test@Test.Com"), "test@test.com");
        assert_eq!(normalize_email("  test@test.com "), "test@test.com");
        assert_eq!(
            normalize_email("TEST@TEST.COM"),
            normalize_email("test@test.com")
        );
    }

    #[test]
    fn sanitize_trims_name_and_email() {
        let request = sign_up("  test ", " Test@Test.com ", "123456").sanitize();
        assert_eq!(request.name, "test");
        assert_eq!(request.email, "test@test.com");
    }

    #[test]
    fn rejects_empty_name() {
        let request = sign_up("   ", "test@test.com", "123456").sanitize();
        assert!(matches!(request.validate(), Err(Error::Validation)));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["", "test", "@test.com", "test@", "test@nodot"] {
            let request = sign_up("test", email, "123456").sanitize();
            assert!(matches!(request.validate(), Err(Error::Validation)), "{email}");
        }
    }

    #[test]
    fn rejects_short_password() {
        let request = sign_up("test", "test@test.com", "12345").sanitize();
        assert!(matches!(request.validate(), Err(Error::Validation)));
    }

    #[test]
    fn sign_in_requires_password() {
        let request = SignInRequest {
            email: "test@test.com".to_string(),
            password: String::new(),
        };
        assert!(matches!(request.validate(), Err(Error::Validation)));
    }
}
