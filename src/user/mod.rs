//! User accounts: sign-up and sign-in.

pub mod api;
pub mod db;
