//! Account registration, authentication, and session-cookie backend for the
//! courseboard platform.
//!
//! Users sign up and sign in against `/users`, admins log in against `/admin`
//! and manage the `courses` resource behind an authenticated route tree.
//! Sessions are JWT cookies signed with per-audience secrets; passwords are
//! stored as Argon2 hashes.

pub mod admin;
pub mod auth;
pub mod config;
pub mod course;
pub mod db;
pub mod error;
pub mod prelude;
mod schema;
pub mod user;
pub mod web;
