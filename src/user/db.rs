//! User account model.

use crate::db::connection::DbConnection;
use crate::prelude::*;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;

/// A registered user account.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user ID.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Normalized email, unique across the table.
    pub email: String,
    /// Argon2 hash of the password. Never the plaintext.
    pub password_hash: String,
    /// When this account was created.
    pub created_at: DateTime<Utc>,
    /// When this account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user account.
#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl UserCreate {
    /// Inserts the account.
    ///
    /// The UNIQUE constraint on `users.email` is the authority on
    /// uniqueness; a violation here (two concurrent sign-ups passing the
    /// handler's pre-check) surfaces as [`Error::Conflict`].
    pub fn create(self, connection: &DbConnection) -> Result<User> {
        let conn = &mut connection.pool.get()?;

        diesel::insert_into(crate::schema::users::table)
            .values(self)
            .returning(User::as_returning())
            .get_result(conn)
            .map_err(|err| match err {
                diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    Error::Conflict
                }
                other => Error::Diesel(other),
            })
    }
}

impl User {
    /// Fetches a user by exact email match, `None` when absent.
    ///
    /// Callers normalize the email before lookup, so matching is
    /// case-insensitive end to end while the SQL comparison stays `=`.
    pub fn fetch_by_email(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        use crate::schema::users::dsl::*;
        let conn = &mut connection.pool.get()?;

        Ok(users
            .filter(email.eq(target))
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }
}
