//! Admin accounts: login, logout, and bootstrap seeding.

pub mod api;
pub mod db;
