/// Notification model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE notifications (
///     id BIGSERIAL PRIMARY KEY,
///     user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     title VARCHAR(255) NOT NULL,
///     message TEXT NOT NULL,
///     type VARCHAR(50) NOT NULL,
///     is_read BOOLEAN NOT NULL DEFAULT FALSE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     related_chore_id BIGINT REFERENCES chores(id) ON DELETE SET NULL
/// );
/// ```
///
/// Notifications are only created as side effects of sharing a list or
/// assigning a chore, never directly by a client. Deleting the referenced
/// chore nulls `related_chore_id` rather than deleting the notification.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use std::fmt;

/// Discriminator recognized by the UI (display icon)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    ChoreAssigned,
    ListShared,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::ChoreAssigned => "ChoreAssigned",
            NotificationType::ListShared => "ListShared",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted per-user notification
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub related_chore_id: Option<i64>,
}

/// Input for creating a notification
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub kind: NotificationType,
    pub related_chore_id: Option<i64>,
}

impl Notification {
    /// Inserts a notification (runs inside the transaction of the
    /// triggering mutation)
    pub async fn create(
        executor: impl PgExecutor<'_>,
        data: CreateNotification,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO notifications (user_id, title, message, type, related_chore_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(data.user_id)
        .bind(data.title)
        .bind(data.message)
        .bind(data.kind.as_str())
        .bind(data.related_chore_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Most recent 50 notifications for a user, newest first
    pub async fn list_recent(pool: &PgPool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, user_id, title, message, type, is_read, created_at, related_chore_id
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 50
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn mark_read(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Clears the unread flag for all of a user's unread notifications;
    /// a no-op when none are unread
    pub async fn mark_all_read(pool: &PgPool, user_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_storage_form() {
        assert_eq!(NotificationType::ChoreAssigned.as_str(), "ChoreAssigned");
        assert_eq!(NotificationType::ListShared.to_string(), "ListShared");
    }
}
