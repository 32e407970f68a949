//! Database connection management.

pub mod connection;
