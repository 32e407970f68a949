//! Wire types for the `/admin` endpoints.

use serde::{Deserialize, Serialize};

use crate::admin::db::Admin;
use crate::prelude::*;

/// `POST /admin/login` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

impl AdminLoginRequest {
    pub fn sanitize(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(Error::Validation);
        }
        Ok(())
    }
}

/// Public view of an admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminApi {
    pub id: i32,
    pub username: String,
}

impl From<Admin> for AdminApi {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_login_payload_passes() {
        let request = AdminLoginRequest {
            username: "testeUsername".to_string(),
            password: "testePassword".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn missing_password_is_rejected() {
        let request = AdminLoginRequest {
            username: "teste".to_string(),
            password: String::new(),
        };
        assert!(matches!(request.validate(), Err(Error::Validation)));
    }

    #[test]
    fn blank_username_is_rejected() {
        let request = AdminLoginRequest {
            username: "   ".to_string(),
            password: "123456".to_string(),
        }
        .sanitize();
        assert!(matches!(request.validate(), Err(Error::Validation)));
    }
}
