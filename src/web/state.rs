//! Shared router state.

use crate::auth::jwt::TokenKeys;
use crate::config::AppConfig;
use crate::db::connection::DbConnection;

/// State cloned into every handler.
#[derive(Clone)]
pub struct ApiState {
    /// Database connection pool.
    pub connection: DbConnection,
    /// Keys signing user session tokens.
    pub user_keys: TokenKeys,
    /// Keys signing admin session tokens.
    pub admin_keys: TokenKeys,
}

impl ApiState {
    pub fn new(config: &AppConfig, connection: DbConnection) -> Self {
        Self {
            connection,
            user_keys: TokenKeys::new(config.jwt_secret.as_bytes()),
            admin_keys: TokenKeys::new(config.admin_jwt_secret.as_bytes()),
        }
    }
}
