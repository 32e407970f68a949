//! Session crypto: password hashing and signed-token issuance/verification.

pub mod error;
pub mod jwt;
pub mod password;
pub mod token;

pub const TOKEN_TYPE: &str = "Bearer";
