//! HTTP surface: router state, request context, middleware, and handlers.

pub mod ctx;
pub mod mw_auth;
pub mod routes_admin;
pub mod routes_courses;
pub mod routes_users;
pub mod state;
