//! Database connection pool and migrations.

use diesel::PgConnection;
use diesel::r2d2::ConnectionManager;
use diesel::r2d2::Pool;
use diesel_migrations::embed_migrations;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Database connection pool wrapper.
#[derive(Debug, Clone)]
pub struct DbConnection {
    /// PostgreSQL connection pool.
    pub pool: Pool<ConnectionManager<PgConnection>>,
}

impl DbConnection {
    /// Create a new database connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use courseboard::{config::AppConfig, db::connection::DbConnection};
    ///
    /// let config = AppConfig::from_env();
    /// let db = DbConnection::new(&config.database_url);
    /// ```
    pub fn new(database_url: &str) -> Self {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .expect("Couldn't establish connection with database");
        Self { pool }
    }

    /// Run pending database migrations and return the configured connection.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use courseboard::{config::AppConfig, db::connection::DbConnection};
    ///
    /// let config = AppConfig::from_env();
    /// let db = DbConnection::new(&config.database_url).setup();
    /// ```
    pub fn setup(self) -> Self {
        info!("Running Database Migrations");
        self.pool
            .get()
            .expect("Couldn't get a connection from the pool to run migrations")
            .run_pending_migrations(MIGRATIONS)
            .expect("Failed to run database migrations");
        self
    }
}
