/// Chore list share model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE chore_list_shares (
///     id BIGSERIAL PRIMARY KEY,
///     chore_list_id BIGINT NOT NULL REFERENCES chore_lists(id) ON DELETE CASCADE,
///     shared_with_user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     permission VARCHAR(50) NOT NULL DEFAULT 'View',
///     shared_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     UNIQUE (chore_list_id, shared_with_user_id)
/// );
/// ```
///
/// At most one share exists per (list, user) pair. The permission level is
/// stored and returned but not enforced by any operation.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use std::fmt;
use std::str::FromStr;

/// Permission level granted by a share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SharePermission {
    #[default]
    View,
    Edit,
    Admin,
}

impl SharePermission {
    /// Storage form, capitalized ("View", "Edit", "Admin").
    pub fn as_str(&self) -> &'static str {
        match self {
            SharePermission::View => "View",
            SharePermission::Edit => "Edit",
            SharePermission::Admin => "Admin",
        }
    }
}

impl fmt::Display for SharePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharePermission {
    type Err = ();

    /// Case-insensitive parse; callers fall back to View on failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view" => Ok(SharePermission::View),
            "edit" => Ok(SharePermission::Edit),
            "admin" => Ok(SharePermission::Admin),
            _ => Err(()),
        }
    }
}

const SELECT_SHARE: &str = r#"
    SELECT cls.id, cls.chore_list_id, cls.shared_with_user_id,
           u.username AS shared_with_username, cls.permission, cls.shared_at
    FROM chore_list_shares cls
    JOIN users u ON u.id = cls.shared_with_user_id
"#;

/// A share grant with the recipient's username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChoreListShare {
    pub id: i64,
    pub chore_list_id: i64,
    pub shared_with_user_id: i64,
    pub shared_with_username: String,
    pub permission: String,
    pub shared_at: DateTime<Utc>,
}

/// Input for creating a share
#[derive(Debug, Clone)]
pub struct CreateShare {
    pub chore_list_id: i64,
    pub shared_with_user_id: i64,
    pub permission: SharePermission,
}

impl ChoreListShare {
    /// Inserts a share and returns its id
    pub async fn create(
        executor: impl PgExecutor<'_>,
        data: CreateShare,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO chore_list_shares (chore_list_id, shared_with_user_id, permission)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(data.chore_list_id)
        .bind(data.shared_with_user_id)
        .bind(data.permission.as_str())
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!("{SELECT_SHARE} WHERE cls.id = $1");
        sqlx::query_as::<_, ChoreListShare>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the list is already shared with the user
    pub async fn exists_for(
        pool: &PgPool,
        chore_list_id: i64,
        user_id: i64,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM chore_list_shares
                WHERE chore_list_id = $1 AND shared_with_user_id = $2
            )
            "#,
        )
        .bind(chore_list_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// All shares for a set of lists, most recent first
    pub async fn list_for_lists(
        pool: &PgPool,
        list_ids: &[i64],
    ) -> Result<Vec<Self>, sqlx::Error> {
        if list_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!("{SELECT_SHARE} WHERE cls.chore_list_id = ANY($1) ORDER BY cls.shared_at DESC");
        sqlx::query_as::<_, ChoreListShare>(&sql)
            .bind(list_ids)
            .fetch_all(pool)
            .await
    }

    /// Removes a share scoped to its list; false when no row matched
    pub async fn delete(
        pool: &PgPool,
        chore_list_id: i64,
        share_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM chore_list_shares WHERE id = $1 AND chore_list_id = $2")
                .bind(share_id)
                .bind(chore_list_id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_parse_case_insensitive() {
        assert_eq!("view".parse(), Ok(SharePermission::View));
        assert_eq!("EDIT".parse(), Ok(SharePermission::Edit));
        assert_eq!(" Admin ".parse(), Ok(SharePermission::Admin));
        assert_eq!("owner".parse::<SharePermission>(), Err(()));
    }

    #[test]
    fn test_permission_default_is_view() {
        assert_eq!(SharePermission::default(), SharePermission::View);
    }

    #[test]
    fn test_permission_storage_form() {
        assert_eq!(SharePermission::View.as_str(), "View");
        assert_eq!(SharePermission::Edit.to_string(), "Edit");
        assert_eq!(SharePermission::Admin.as_str(), "Admin");
    }
}
