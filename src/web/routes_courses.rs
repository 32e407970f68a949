//! `/admin/courses` handlers. The whole tree sits behind `mw_require_auth`.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::course::db::{Course, CourseData};
use crate::prelude::*;

use super::state::ApiState;

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/{id}", get(get_course).put(update_course).delete(delete_course))
}

async fn list_courses(State(state): State<ApiState>) -> Result<Json<Vec<Course>>> {
    Ok(Json(Course::fetch_all(&state.connection)?))
}

async fn get_course(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<Course>> {
    Ok(Json(Course::fetch_by_id(id, &state.connection)?))
}

async fn create_course(
    State(state): State<ApiState>,
    Json(payload): Json<CourseData>,
) -> Result<(StatusCode, Json<Course>)> {
    let payload = payload.sanitize();
    payload.validate()?;
    let course = payload.create(&state.connection)?;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn update_course(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Json(payload): Json<CourseData>,
) -> Result<Json<Course>> {
    let payload = payload.sanitize();
    payload.validate()?;
    Ok(Json(payload.update(id, &state.connection)?))
}

async fn delete_course(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    Course::delete(id, &state.connection)?;
    Ok(StatusCode::NO_CONTENT)
}
