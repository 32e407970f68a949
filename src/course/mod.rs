//! The `courses` resource managed by admins.

pub mod api;
pub mod db;
