/// Chore list model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE chore_lists (
///     id BIGSERIAL PRIMARY KEY,
///     name VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     owner_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// A list is owned by exactly one user and visible to users it is shared
/// with. Every read joins the owner's username since all API
/// representations include it.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

const SELECT_LIST: &str = r#"
    SELECT cl.id, cl.name, cl.description, cl.owner_id, u.username AS owner_username,
           cl.created_at, cl.updated_at
    FROM chore_lists cl
    JOIN users u ON u.id = cl.owner_id
"#;

/// A chore list with its owner's username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChoreList {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub owner_id: i64,
    pub owner_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new chore list
#[derive(Debug, Clone)]
pub struct CreateChoreList {
    pub name: String,
    pub description: String,
    pub owner_id: i64,
}

/// Input for updating a chore list
///
/// Only non-None fields are written; `updated_at` advances either way.
#[derive(Debug, Clone, Default)]
pub struct UpdateChoreList {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Per-list chore totals computed in a single aggregate query
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChoreCounts {
    pub chore_list_id: i64,
    pub total: i64,
    pub completed: i64,
}

impl ChoreList {
    /// Inserts a new list and returns its id
    pub async fn create(
        executor: impl PgExecutor<'_>,
        data: CreateChoreList,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO chore_lists (name, description, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.owner_id)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!("{SELECT_LIST} WHERE cl.id = $1");
        sqlx::query_as::<_, ChoreList>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM chore_lists WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Lists owned by the given user
    pub async fn list_owned_by(pool: &PgPool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let sql = format!("{SELECT_LIST} WHERE cl.owner_id = $1 ORDER BY cl.id");
        sqlx::query_as::<_, ChoreList>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Lists shared with the given user
    pub async fn list_shared_with(pool: &PgPool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, ChoreList>(
            r#"
            SELECT DISTINCT cl.id, cl.name, cl.description, cl.owner_id,
                   u.username AS owner_username, cl.created_at, cl.updated_at
            FROM chore_list_shares cls
            JOIN chore_lists cl ON cl.id = cls.chore_list_id
            JOIN users u ON u.id = cl.owner_id
            WHERE cls.shared_with_user_id = $1
            ORDER BY cl.id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Updates name/description; `updated_at` is bumped even for an empty
    /// update. Returns false when the list does not exist.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: i64,
        data: UpdateChoreList,
    ) -> Result<bool, sqlx::Error> {
        let mut query = String::from("UPDATE chore_lists SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.name.is_some() {
            bind_count += 1;
            query.push_str(&format!(", name = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }

        query.push_str(" WHERE id = $1");

        let mut q = sqlx::query(&query).bind(id);

        if let Some(name) = data.name {
            q = q.bind(name);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }

        let result = q.execute(executor).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chore_lists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Total/completed chore counts for a set of lists in one query
    pub async fn chore_counts(
        pool: &PgPool,
        list_ids: &[i64],
    ) -> Result<Vec<ChoreCounts>, sqlx::Error> {
        if list_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, ChoreCounts>(
            r#"
            SELECT chore_list_id,
                   COUNT(*) AS total,
                   COUNT(*) FILTER (WHERE is_completed) AS completed
            FROM chores
            WHERE chore_list_id = ANY($1)
            GROUP BY chore_list_id
            "#,
        )
        .bind(list_ids)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_chore_list_default() {
        let update = UpdateChoreList::default();
        assert!(update.name.is_none());
        assert!(update.description.is_none());
    }
}
