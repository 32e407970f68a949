//! Course model.

use crate::db::connection::DbConnection;
use crate::prelude::*;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A course as stored and as served to admins.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Course {
    /// Unique course ID.
    pub id: i32,
    pub title: String,
    pub description: String,
    pub photo: String,
    pub alt: String,
    pub background: String,
    /// When this course was created.
    pub created_at: DateTime<Utc>,
    /// When this course was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Course fields as accepted on create and full update.
#[derive(Insertable, AsChangeset, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::courses)]
pub struct CourseData {
    pub title: String,
    pub description: String,
    pub photo: String,
    pub alt: String,
    pub background: String,
}

impl CourseData {
    pub fn create(self, connection: &DbConnection) -> Result<Course> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(crate::schema::courses::table)
            .values(self)
            .returning(Course::as_returning())
            .get_result(conn)?)
    }

    /// Replaces every field of the course, [`Error::NotFound`] for an
    /// unknown id.
    pub fn update(self, target: i32, connection: &DbConnection) -> Result<Course> {
        use crate::schema::courses::dsl::*;
        let conn = &mut connection.pool.get()?;

        diesel::update(courses.filter(id.eq(target)))
            .set(self)
            .returning(Course::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or(Error::NotFound)
    }
}

impl Course {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        use crate::schema::courses::dsl::*;
        let conn = &mut connection.pool.get()?;

        Ok(courses.order(id.asc()).load(conn)?)
    }

    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Self> {
        use crate::schema::courses::dsl::*;
        let conn = &mut connection.pool.get()?;

        courses
            .filter(id.eq(target))
            .select(Course::as_select())
            .first(conn)
            .optional()?
            .ok_or(Error::NotFound)
    }

    /// Deletes the course, [`Error::NotFound`] for an unknown id.
    pub fn delete(target: i32, connection: &DbConnection) -> Result<()> {
        use crate::schema::courses::dsl::*;
        let conn = &mut connection.pool.get()?;

        let deleted = diesel::delete(courses.filter(id.eq(target))).execute(conn)?;
        if deleted == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
