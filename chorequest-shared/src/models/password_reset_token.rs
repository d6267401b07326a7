/// Password reset token model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE password_reset_tokens (
///     id BIGSERIAL PRIMARY KEY,
///     user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     token VARCHAR(255) NOT NULL UNIQUE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     expires_at TIMESTAMPTZ NOT NULL,
///     is_used BOOLEAN NOT NULL DEFAULT FALSE
/// );
/// ```
///
/// Tokens are single-use and expire one hour after creation. A token whose
/// expiry equals the current instant counts as expired.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

/// A stored reset token
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PasswordResetToken {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_used: bool,
}

impl PasswordResetToken {
    /// Stores a freshly generated token for a user
    pub async fn create(
        executor: impl PgExecutor<'_>,
        user_id: i64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO password_reset_tokens (user_id, token, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(token)
        .bind(expires_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Looks up a token that has not been consumed yet
    ///
    /// Expiry is checked by the caller so the "unknown" and "expired"
    /// cases produce the same client-facing error.
    pub async fn find_unused(pool: &PgPool, token: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, PasswordResetToken>(
            r#"
            SELECT id, user_id, token, created_at, expires_at, is_used
            FROM password_reset_tokens
            WHERE token = $1 AND is_used = FALSE
            "#,
        )
        .bind(token)
        .fetch_optional(pool)
        .await
    }

    /// Consumes the token; it can never verify again
    pub async fn mark_used(executor: impl PgExecutor<'_>, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE password_reset_tokens SET is_used = TRUE WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Strict expiry: the expiry instant itself is already expired
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token_expiring_at(expires_at: DateTime<Utc>) -> PasswordResetToken {
        PasswordResetToken {
            id: 1,
            user_id: 1,
            token: "deadbeef".to_string(),
            created_at: expires_at - Duration::hours(1),
            expires_at,
            is_used: false,
        }
    }

    #[test]
    fn test_token_valid_before_expiry() {
        let now = Utc::now();
        let token = token_expiring_at(now + Duration::minutes(5));
        assert!(!token.is_expired_at(now));
    }

    #[test]
    fn test_token_expired_at_exact_instant() {
        let now = Utc::now();
        let token = token_expiring_at(now);
        assert!(token.is_expired_at(now));
    }

    #[test]
    fn test_token_expired_after_expiry() {
        let now = Utc::now();
        let token = token_expiring_at(now - Duration::seconds(1));
        assert!(token.is_expired_at(now));
    }
}
