/// Chore model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE chores (
///     id BIGSERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     chore_list_id BIGINT NOT NULL REFERENCES chore_lists(id) ON DELETE CASCADE,
///     assigned_to_id BIGINT REFERENCES users(id) ON DELETE SET NULL,
///     due_date TIMESTAMPTZ,
///     is_completed BOOLEAN NOT NULL DEFAULT FALSE,
///     completed_at TIMESTAMPTZ,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     is_recurring BOOLEAN NOT NULL DEFAULT FALSE,
///     recurrence_pattern VARCHAR(50),
///     recurrence_interval INT,
///     recurrence_end_date TIMESTAMPTZ
/// );
/// ```
///
/// Recurrence fields (pattern, interval) are only meaningful while
/// `is_recurring` is true; otherwise they are null. Chores are always
/// addressed through their list, so every lookup is scoped by
/// `chore_list_id`.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

const SELECT_CHORE: &str = r#"
    SELECT c.id, c.title, c.description, c.chore_list_id, c.assigned_to_id,
           u.username AS assigned_to_username, c.due_date, c.is_completed,
           c.completed_at, c.created_at, c.updated_at, c.is_recurring,
           c.recurrence_pattern, c.recurrence_interval, c.recurrence_end_date
    FROM chores c
    LEFT JOIN users u ON u.id = c.assigned_to_id
"#;

/// A chore with its assignee's username when assigned
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Chore {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub chore_list_id: i64,
    pub assigned_to_id: Option<i64>,
    pub assigned_to_username: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_recurring: bool,
    /// Stored capitalized ("Daily", "Weekly", "Monthly", "Yearly")
    pub recurrence_pattern: Option<String>,
    pub recurrence_interval: Option<i32>,
    pub recurrence_end_date: Option<DateTime<Utc>>,
}

/// Input for creating a new chore
#[derive(Debug, Clone)]
pub struct CreateChore {
    pub title: String,
    pub description: String,
    pub chore_list_id: i64,
    pub assigned_to_id: Option<i64>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub recurrence_interval: Option<i32>,
    pub recurrence_end_date: Option<DateTime<Utc>>,
}

/// Input for updating a chore
///
/// `None` leaves the column untouched. Nullable columns use a nested
/// Option: `Some(None)` writes NULL, `Some(Some(v))` writes the value.
/// Only present fields are written; `updated_at` advances regardless.
#[derive(Debug, Clone, Default)]
pub struct UpdateChore {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_to_id: Option<Option<i64>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub is_completed: Option<bool>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
    pub is_recurring: Option<bool>,
    pub recurrence_pattern: Option<Option<String>>,
    pub recurrence_interval: Option<Option<i32>>,
    pub recurrence_end_date: Option<Option<DateTime<Utc>>>,
}

impl Chore {
    /// Inserts a new chore and returns its id
    pub async fn create(
        executor: impl PgExecutor<'_>,
        data: CreateChore,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO chores (
                title, description, chore_list_id, assigned_to_id, due_date,
                is_recurring, recurrence_pattern, recurrence_interval, recurrence_end_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.chore_list_id)
        .bind(data.assigned_to_id)
        .bind(data.due_date)
        .bind(data.is_recurring)
        .bind(data.recurrence_pattern)
        .bind(data.recurrence_interval)
        .bind(data.recurrence_end_date)
        .fetch_one(executor)
        .await
    }

    /// All chores of a list, ascending by id
    pub async fn list_for_list(pool: &PgPool, chore_list_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let sql = format!("{SELECT_CHORE} WHERE c.chore_list_id = $1 ORDER BY c.id");
        sqlx::query_as::<_, Chore>(&sql)
            .bind(chore_list_id)
            .fetch_all(pool)
            .await
    }

    /// Finds a chore addressed through its list
    pub async fn find_in_list(
        pool: &PgPool,
        chore_list_id: i64,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!("{SELECT_CHORE} WHERE c.id = $1 AND c.chore_list_id = $2");
        sqlx::query_as::<_, Chore>(&sql)
            .bind(id)
            .bind(chore_list_id)
            .fetch_optional(pool)
            .await
    }

    /// Writes the changed columns of a chore
    ///
    /// Builds a dynamic UPDATE covering only the fields present in `data`,
    /// so unchanged columns are never rewritten. Returns false when the
    /// chore does not exist in the list.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        chore_list_id: i64,
        id: i64,
        data: UpdateChore,
    ) -> Result<bool, sqlx::Error> {
        let mut query = String::from("UPDATE chores SET updated_at = NOW()");
        let mut bind_count = 2;

        let mut push = |query: &mut String, column: &str, bind_count: &mut i32| {
            *bind_count += 1;
            query.push_str(&format!(", {} = ${}", column, bind_count));
        };

        if data.title.is_some() {
            push(&mut query, "title", &mut bind_count);
        }
        if data.description.is_some() {
            push(&mut query, "description", &mut bind_count);
        }
        if data.assigned_to_id.is_some() {
            push(&mut query, "assigned_to_id", &mut bind_count);
        }
        if data.due_date.is_some() {
            push(&mut query, "due_date", &mut bind_count);
        }
        if data.is_completed.is_some() {
            push(&mut query, "is_completed", &mut bind_count);
        }
        if data.completed_at.is_some() {
            push(&mut query, "completed_at", &mut bind_count);
        }
        if data.is_recurring.is_some() {
            push(&mut query, "is_recurring", &mut bind_count);
        }
        if data.recurrence_pattern.is_some() {
            push(&mut query, "recurrence_pattern", &mut bind_count);
        }
        if data.recurrence_interval.is_some() {
            push(&mut query, "recurrence_interval", &mut bind_count);
        }
        if data.recurrence_end_date.is_some() {
            push(&mut query, "recurrence_end_date", &mut bind_count);
        }

        query.push_str(" WHERE id = $1 AND chore_list_id = $2");

        let mut q = sqlx::query(&query).bind(id).bind(chore_list_id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(assigned_to_id) = data.assigned_to_id {
            q = q.bind(assigned_to_id);
        }
        if let Some(due_date) = data.due_date {
            q = q.bind(due_date);
        }
        if let Some(is_completed) = data.is_completed {
            q = q.bind(is_completed);
        }
        if let Some(completed_at) = data.completed_at {
            q = q.bind(completed_at);
        }
        if let Some(is_recurring) = data.is_recurring {
            q = q.bind(is_recurring);
        }
        if let Some(recurrence_pattern) = data.recurrence_pattern {
            q = q.bind(recurrence_pattern);
        }
        if let Some(recurrence_interval) = data.recurrence_interval {
            q = q.bind(recurrence_interval);
        }
        if let Some(recurrence_end_date) = data.recurrence_end_date {
            q = q.bind(recurrence_end_date);
        }

        let result = q.execute(executor).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Removes a chore scoped to its list; false when no row matched
    pub async fn delete(pool: &PgPool, chore_list_id: i64, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chores WHERE id = $1 AND chore_list_id = $2")
            .bind(id)
            .bind(chore_list_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

