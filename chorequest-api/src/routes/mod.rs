/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: Registration, login, password reset
/// - `chore_lists`: Chore list CRUD and sharing
/// - `chores`: Chore CRUD, assignment, completion/recurrence
/// - `notifications`: Per-user notification feed

pub mod chore_lists;
pub mod chores;
pub mod health;
pub mod notifications;
pub mod users;

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Deserializer};

/// Query string carrying the acting user, e.g. `?userId=3`
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Extracts the required numeric `userId` query parameter
pub(crate) fn require_user_id(query: &UserIdQuery) -> ApiResult<i64> {
    query
        .user_id
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or_else(|| {
            ApiError::BadRequest("Query parameter userId is required.".to_string())
        })
}

/// Deserializes a present field into `Some(value)`, keeping explicit `null`
/// distinguishable from an absent field
///
/// Used with `Option<Option<T>>` DTO fields: absent stays `None` (via
/// `#[serde(default)]`), `null` becomes `Some(None)`, a value becomes
/// `Some(Some(v))`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_user_id() {
        let query = UserIdQuery {
            user_id: Some("42".to_string()),
        };
        assert_eq!(require_user_id(&query).unwrap(), 42);

        let missing = UserIdQuery { user_id: None };
        assert!(require_user_id(&missing).is_err());

        let non_numeric = UserIdQuery {
            user_id: Some("abc".to_string()),
        };
        assert!(require_user_id(&non_numeric).is_err());
    }
}
