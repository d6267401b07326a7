//! # ChoreQuest Shared Library
//!
//! This crate contains the data layer and domain utilities used by the
//! ChoreQuest API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and SQL operations
//! - `auth`: Password hashing and reset-token generation
//! - `db`: Connection pool and schema migrations
//! - `recurrence`: Recurring-chore date advancement

pub mod auth;
pub mod db;
pub mod models;
pub mod recurrence;

/// Current version of the ChoreQuest shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
