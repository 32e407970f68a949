//! Secure password hashing and verification using Argon2.
//!
//! Hashes carry a random per-call salt, so hashing the same password twice
//! yields two different strings that both verify.

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use super::error::{Error, Result};

/// Generates a salted Argon2 hash for the provided password.
///
/// The resulting string embeds the salt and parameters needed for
/// verification and is what gets stored in the accounts table.
///
/// # Examples
///
/// ```rust
/// use courseboard::auth::password::{generate_password_hash, is_password_valid};
///
/// let hash = generate_password_hash("123456").unwrap();
/// assert!(is_password_valid("123456", &hash).unwrap());
/// ```
pub fn generate_password_hash(pw: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
}

/// Verifies a password against a stored hash.
///
/// Returns `Ok(false)` on any mismatch; errors only when the stored hash
/// material itself cannot be parsed.
pub fn is_password_valid(pw: &str, hash: &str) -> Result<bool> {
    let hash = PasswordHashString::new(hash)?;

    Ok(Argon2::default()
        .verify_password(pw.as_bytes(), &hash.password_hash())
        .is_ok())
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_never_the_plaintext() {
        let hash = generate_password_hash("123456").unwrap();
        assert_ne!(hash, "123456");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn hashing_twice_yields_different_hashes() {
        let first = generate_password_hash("123456").unwrap();
        let second = generate_password_hash("123456").unwrap();
        assert_ne!(first, second);
        assert!(is_password_valid("123456", &first).unwrap());
        assert!(is_password_valid("123456", &second).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = generate_password_hash("123456").unwrap();
        assert!(!is_password_valid("1234567", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_material_errors() {
        let result = is_password_valid("123456", "not-a-phc-string");
        assert!(matches!(result, Err(Error::PasswordHash(_))));
    }
}
