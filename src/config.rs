//! Environment-driven application configuration.
//!
//! All configuration is gathered once at bootstrap into an [`AppConfig`]
//! value that is passed into the router state; nothing else in the crate
//! reads the process environment.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL database URL.
    pub database_url: String,
    /// Secret used to sign user session tokens.
    pub jwt_secret: String,
    /// Secret used to sign admin session tokens.
    pub admin_jwt_secret: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Username for the bootstrap admin account, when configured.
    pub admin_username: Option<String>,
    /// Password for the bootstrap admin account, when configured.
    pub admin_password: Option<String>,
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Get required environment variable or panic.
fn get_env_variable(var: &str) -> String {
    std::env::var(var).expect(&format!("Env Variable '{}' missing", var))
}

impl AppConfig {
    /// Create application configuration from environment variables.
    ///
    /// Requires `DATABASE_URL`, `JWT_SECRET` and `ADMIN_JWT_SECRET`.
    /// `BIND_ADDR` defaults to `0.0.0.0:3000`; `ADMIN_USERNAME` and
    /// `ADMIN_PASSWORD` are optional and only drive the bootstrap seed.
    pub fn from_env() -> Self {
        Self {
            database_url: get_env_variable("DATABASE_URL"),
            jwt_secret: get_env_variable("JWT_SECRET"),
            admin_jwt_secret: get_env_variable("ADMIN_JWT_SECRET"),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| String::from(DEFAULT_BIND_ADDR)),
            admin_username: std::env::var("ADMIN_USERNAME").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn set_required_vars() {
        unsafe {
            env::set_var("DATABASE_URL", "postgres://localhost/courseboard_test");
            env::set_var("JWT_SECRET", "user-secret");
            env::set_var("ADMIN_JWT_SECRET", "admin-secret");
        }
    }

    #[test]
    #[serial]
    fn reads_required_variables() {
        set_required_vars();
        unsafe {
            env::remove_var("BIND_ADDR");
            env::remove_var("ADMIN_USERNAME");
            env::remove_var("ADMIN_PASSWORD");
        }

        let config = AppConfig::from_env();
        assert_eq!(config.database_url, "postgres://localhost/courseboard_test");
        assert_eq!(config.jwt_secret, "user-secret");
        assert_eq!(config.admin_jwt_secret, "admin-secret");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.admin_username.is_none());
        assert!(config.admin_password.is_none());
    }

    #[test]
    #[serial]
    fn reads_optional_variables() {
        set_required_vars();
        unsafe {
            env::set_var("BIND_ADDR", "127.0.0.1:4000");
            env::set_var("ADMIN_USERNAME", "root");
            env::set_var("ADMIN_PASSWORD", "hunter2");
        }

        let config = AppConfig::from_env();
        assert_eq!(config.bind_addr, "127.0.0.1:4000");
        assert_eq!(config.admin_username.as_deref(), Some("root"));
        assert_eq!(config.admin_password.as_deref(), Some("hunter2"));

        unsafe {
            env::remove_var("BIND_ADDR");
            env::remove_var("ADMIN_USERNAME");
            env::remove_var("ADMIN_PASSWORD");
        }
    }
}
