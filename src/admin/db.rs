//! Admin account model and bootstrap seeding.

use crate::auth::password::generate_password_hash;
use crate::config::AppConfig;
use crate::db::connection::DbConnection;
use crate::prelude::*;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::{info, warn};

/// An admin account.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = crate::schema::admins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Admin {
    /// Unique admin ID.
    pub id: i32,
    /// Login username, unique across the table.
    pub username: String,
    /// Argon2 hash of the password.
    pub password_hash: String,
    /// When this account was created.
    pub created_at: DateTime<Utc>,
    /// When this account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new admin account.
#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::admins)]
pub struct AdminCreate {
    pub username: String,
    pub password_hash: String,
}

impl AdminCreate {
    pub fn create(self, connection: &DbConnection) -> Result<Admin> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(crate::schema::admins::table)
            .values(self)
            .returning(Admin::as_returning())
            .get_result(conn)?)
    }
}

impl Admin {
    /// Fetches an admin by exact username match, `None` when absent.
    pub fn fetch_by_username(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        use crate::schema::admins::dsl::*;
        let conn = &mut connection.pool.get()?;

        Ok(admins
            .filter(username.eq(target))
            .select(Admin::as_select())
            .first(conn)
            .optional()?)
    }
}

/// Seeds the bootstrap admin account from configured credentials.
///
/// Runs at startup. Does nothing when the credentials are not configured or
/// the account already exists, so restarts are idempotent.
pub fn seed_from_config(config: &AppConfig, connection: &DbConnection) -> Result<()> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        warn!("Admin bootstrap credentials not configured, skipping seed");
        return Ok(());
    };

    if Admin::fetch_by_username(username, connection)?.is_some() {
        return Ok(());
    }

    let hash = generate_password_hash(password)?;
    AdminCreate {
        username: username.clone(),
        password_hash: hash,
    }
    .create(connection)?;
    info!("Seeded bootstrap admin '{username}'");
    Ok(())
}
