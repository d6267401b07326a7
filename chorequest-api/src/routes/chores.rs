/// Chore routes: CRUD within a list, assignment, completion
///
/// Updates are expressed as desired state: the handler merges the payload
/// over the stored row, applies the completion/recurrence transition, and
/// writes only the columns whose values actually changed.

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath};
use crate::routes::deserialize_some;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chorequest_shared::models::chore::{Chore, CreateChore, UpdateChore};
use chorequest_shared::models::chore_list::ChoreList;
use chorequest_shared::models::notification::{CreateNotification, Notification, NotificationType};
use chorequest_shared::models::user::User;
use chorequest_shared::recurrence::{next_due_date, RecurrencePattern};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateChoreRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "assignedToId")]
    pub assigned_to_id: Option<i64>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    #[serde(default, rename = "isRecurring")]
    pub is_recurring: bool,
    #[serde(rename = "recurrencePattern")]
    pub recurrence_pattern: Option<String>,
    #[serde(rename = "recurrenceInterval")]
    pub recurrence_interval: Option<i32>,
    #[serde(rename = "recurrenceEndDate")]
    pub recurrence_end_date: Option<String>,
}

impl CreateChoreRequest {
    /// Validates and normalizes the payload into an insertable chore
    ///
    /// The assignee's existence is checked separately since it needs the
    /// store.
    fn into_chore(self, chore_list_id: i64) -> ApiResult<CreateChore> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ApiError::BadRequest("Title is required.".to_string()));
        }

        let due_date = parse_optional_date(self.due_date.as_deref())?;

        let (recurrence_pattern, recurrence_interval, recurrence_end_date) = create_recurrence(
            self.is_recurring,
            self.recurrence_pattern.as_deref(),
            self.recurrence_interval,
            self.recurrence_end_date.as_deref(),
        )?;

        Ok(CreateChore {
            title,
            description: self.description.trim().to_string(),
            chore_list_id,
            assigned_to_id: self.assigned_to_id,
            due_date,
            is_recurring: self.is_recurring,
            recurrence_pattern,
            recurrence_interval,
            recurrence_end_date,
        })
    }
}

/// Partial update; `Option<Option<T>>` keeps "field absent" distinct from
/// "field explicitly null"
#[derive(Debug, Default, Deserialize)]
pub struct UpdateChoreRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(
        default,
        rename = "assignedToId",
        deserialize_with = "deserialize_some"
    )]
    pub assigned_to_id: Option<Option<i64>>,
    #[serde(default, rename = "dueDate", deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<String>>,
    #[serde(rename = "isCompleted")]
    pub is_completed: Option<bool>,
    #[serde(rename = "isRecurring")]
    pub is_recurring: Option<bool>,
    #[serde(
        default,
        rename = "recurrencePattern",
        deserialize_with = "deserialize_some"
    )]
    pub recurrence_pattern: Option<Option<String>>,
    #[serde(
        default,
        rename = "recurrenceInterval",
        deserialize_with = "deserialize_some"
    )]
    pub recurrence_interval: Option<Option<i32>>,
    #[serde(
        default,
        rename = "recurrenceEndDate",
        deserialize_with = "deserialize_some"
    )]
    pub recurrence_end_date: Option<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct ChoreResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "choreListId")]
    pub chore_list_id: i64,
    #[serde(rename = "assignedToId")]
    pub assigned_to_id: Option<i64>,
    #[serde(rename = "assignedToUsername")]
    pub assigned_to_username: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(rename = "isRecurring")]
    pub is_recurring: bool,
    #[serde(rename = "recurrencePattern")]
    pub recurrence_pattern: Option<String>,
    #[serde(rename = "recurrenceInterval")]
    pub recurrence_interval: Option<i32>,
    #[serde(rename = "recurrenceEndDate")]
    pub recurrence_end_date: Option<String>,
}

impl From<Chore> for ChoreResponse {
    fn from(chore: Chore) -> Self {
        Self {
            id: chore.id,
            title: chore.title,
            description: chore.description,
            chore_list_id: chore.chore_list_id,
            assigned_to_id: chore.assigned_to_id,
            assigned_to_username: chore.assigned_to_username,
            due_date: chore.due_date.map(|at| at.to_rfc3339()),
            is_completed: chore.is_completed,
            completed_at: chore.completed_at.map(|at| at.to_rfc3339()),
            created_at: chore.created_at.to_rfc3339(),
            updated_at: chore.updated_at.to_rfc3339(),
            is_recurring: chore.is_recurring,
            recurrence_pattern: chore.recurrence_pattern,
            recurrence_interval: chore.recurrence_interval,
            recurrence_end_date: chore.recurrence_end_date.map(|at| at.to_rfc3339()),
        }
    }
}

/// Parses the date formats clients actually send, normalized to UTC
///
/// Accepted, in order: RFC 3339, a naive `T`- or space-separated
/// datetime (taken as UTC), and a bare date (midnight UTC).
fn parse_date(raw: &str) -> ApiResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ApiError::BadRequest("Invalid date format.".to_string()))
}

fn parse_optional_date(raw: Option<&str>) -> ApiResult<Option<DateTime<Utc>>> {
    raw.map(parse_date).transpose()
}

fn parse_pattern(raw: &str) -> ApiResult<RecurrencePattern> {
    raw.parse::<RecurrencePattern>()
        .map_err(|_| ApiError::BadRequest("Invalid recurrence pattern.".to_string()))
}

fn validate_interval(interval: i32) -> ApiResult<i32> {
    if interval < 1 {
        return Err(ApiError::BadRequest(
            "recurrenceInterval must be >= 1.".to_string(),
        ));
    }
    Ok(interval)
}

async fn require_list(state: &AppState, chore_list_id: i64) -> ApiResult<()> {
    if !ChoreList::exists(&state.db, chore_list_id).await? {
        return Err(ApiError::NotFound("Chore list not found".to_string()));
    }
    Ok(())
}

async fn require_assignee(state: &AppState, user_id: i64) -> ApiResult<()> {
    if !User::exists(&state.db, user_id).await? {
        return Err(ApiError::BadRequest("Assigned user not found".to_string()));
    }
    Ok(())
}

/// Validates the recurrence block of a create payload
///
/// Everything is null when the chore is not recurring. A recurring chore
/// must carry a valid pattern and an explicit interval.
fn create_recurrence(
    is_recurring: bool,
    pattern: Option<&str>,
    interval: Option<i32>,
    end_date: Option<&str>,
) -> ApiResult<(Option<String>, Option<i32>, Option<DateTime<Utc>>)> {
    if !is_recurring {
        return Ok((None, None, None));
    }

    let pattern = match pattern {
        Some(raw) => parse_pattern(raw)?,
        None => {
            return Err(ApiError::BadRequest(
                "Invalid recurrence pattern.".to_string(),
            ))
        }
    };
    let interval = match interval {
        Some(interval) => validate_interval(interval)?,
        None => {
            return Err(ApiError::BadRequest(
                "recurrenceInterval must be >= 1.".to_string(),
            ))
        }
    };
    let end_date = parse_optional_date(end_date)?;

    Ok((Some(pattern.as_str().to_string()), Some(interval), end_date))
}

/// Validates the recurrence fields present in an update payload
///
/// Runs before any branching on the merged recurrence state, so bad input
/// is rejected even when the chore is not (or is no longer) recurring.
#[allow(clippy::type_complexity)]
fn update_recurrence(
    pattern: Option<Option<String>>,
    interval: Option<Option<i32>>,
    end_date: Option<Option<String>>,
) -> ApiResult<(
    Option<Option<RecurrencePattern>>,
    Option<Option<i32>>,
    Option<Option<DateTime<Utc>>>,
)> {
    let pattern = match pattern {
        Some(Some(raw)) => Some(Some(parse_pattern(&raw)?)),
        Some(None) => Some(None),
        None => None,
    };
    let interval = match interval {
        Some(Some(interval)) => Some(Some(validate_interval(interval)?)),
        Some(None) => Some(None),
        None => None,
    };
    let end_date = match end_date {
        Some(raw) => Some(parse_optional_date(raw.as_deref())?),
        None => None,
    };

    Ok((pattern, interval, end_date))
}

/// Outcome of marking a chore complete
#[derive(Debug, PartialEq, Eq)]
enum Transition {
    /// Recurring chore: advance the due date and stay incomplete
    RollForward(DateTime<Utc>),
    /// Complete for good, stamping the completion time
    Complete,
}

/// Decides whether completing a chore rolls it forward instead
///
/// A recurring chore with a due date and a pattern advances to its next
/// occurrence as long as that occurrence is on or before the recurrence
/// end date (when one is set). Anything else completes normally.
fn completion_transition(
    due_date: Option<DateTime<Utc>>,
    is_recurring: bool,
    pattern: Option<RecurrencePattern>,
    interval: Option<i32>,
    end_date: Option<DateTime<Utc>>,
) -> Transition {
    let next = match (is_recurring, due_date, pattern) {
        (true, Some(due), Some(pattern)) => next_due_date(due, pattern, interval.unwrap_or(1)),
        _ => None,
    };

    match next {
        Some(next) if end_date.map_or(true, |end| next <= end) => Transition::RollForward(next),
        _ => Transition::Complete,
    }
}

fn assignment_notification(user_id: i64, chore_title: &str, chore_id: i64) -> CreateNotification {
    CreateNotification {
        user_id,
        title: "Chore Assigned".to_string(),
        message: format!("You have been assigned to '{}'", chore_title),
        kind: NotificationType::ChoreAssigned,
        related_chore_id: Some(chore_id),
    }
}

/// GET /api/chorelists/:id/chores
pub async fn index(
    State(state): State<AppState>,
    ApiPath(chore_list_id): ApiPath<i64>,
) -> ApiResult<Json<Vec<ChoreResponse>>> {
    require_list(&state, chore_list_id).await?;

    let chores = Chore::list_for_list(&state.db, chore_list_id).await?;
    Ok(Json(chores.into_iter().map(ChoreResponse::from).collect()))
}

/// GET /api/chorelists/:id/chores/:choreId
pub async fn show(
    State(state): State<AppState>,
    ApiPath((chore_list_id, id)): ApiPath<(i64, i64)>,
) -> ApiResult<Json<ChoreResponse>> {
    require_list(&state, chore_list_id).await?;

    let chore = Chore::find_in_list(&state.db, chore_list_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chore not found".to_string()))?;

    Ok(Json(ChoreResponse::from(chore)))
}

/// POST /api/chorelists/:id/chores
pub async fn create(
    State(state): State<AppState>,
    ApiPath(chore_list_id): ApiPath<i64>,
    ApiJson(body): ApiJson<CreateChoreRequest>,
) -> ApiResult<Response> {
    require_list(&state, chore_list_id).await?;

    let data = body.into_chore(chore_list_id)?;
    if let Some(user_id) = data.assigned_to_id {
        require_assignee(&state, user_id).await?;
    }

    let title = data.title.clone();
    let assigned_to_id = data.assigned_to_id;

    let mut tx = state.db.begin().await?;
    let id = Chore::create(&mut *tx, data).await?;

    if let Some(user_id) = assigned_to_id {
        Notification::create(&mut *tx, assignment_notification(user_id, &title, id)).await?;
    }
    tx.commit().await?;

    let chore = Chore::find_in_list(&state.db, chore_list_id, id)
        .await?
        .ok_or_else(|| ApiError::Internal("Created chore vanished".to_string()))?;

    tracing::info!(chore_id = id, chore_list_id, "Created chore '{}'", title);

    let location = format!("/api/chorelists/{}/chores/{}", chore_list_id, id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ChoreResponse::from(chore)),
    )
        .into_response())
}

/// PUT /api/chorelists/:id/chores/:choreId
pub async fn update(
    State(state): State<AppState>,
    ApiPath((chore_list_id, id)): ApiPath<(i64, i64)>,
    ApiJson(body): ApiJson<UpdateChoreRequest>,
) -> ApiResult<Json<ChoreResponse>> {
    let current = Chore::find_in_list(&state.db, chore_list_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chore not found".to_string()))?;

    // Validate and merge the payload over the stored row.
    let title = match body.title {
        Some(raw) => {
            let title = raw.trim().to_string();
            if title.is_empty() {
                return Err(ApiError::BadRequest("Title cannot be empty.".to_string()));
            }
            title
        }
        None => current.title.clone(),
    };

    let description = body
        .description
        .map(|raw| raw.trim().to_string())
        .unwrap_or_else(|| current.description.clone());

    let assigned_to_id = match body.assigned_to_id {
        Some(Some(user_id)) => {
            require_assignee(&state, user_id).await?;
            Some(user_id)
        }
        Some(None) => None,
        None => current.assigned_to_id,
    };

    let mut due_date = match body.due_date {
        Some(raw) => parse_optional_date(raw.as_deref())?,
        None => current.due_date,
    };

    // Present recurrence fields are validated even when the merged state
    // is not recurring; only the stored values depend on that state.
    let (pattern_update, interval_update, end_date_update) = update_recurrence(
        body.recurrence_pattern,
        body.recurrence_interval,
        body.recurrence_end_date,
    )?;

    let is_recurring = body.is_recurring.unwrap_or(current.is_recurring);

    let (recurrence_pattern, recurrence_interval, recurrence_end_date) = if is_recurring {
        let pattern = match pattern_update {
            Some(update) => update,
            None => current
                .recurrence_pattern
                .as_deref()
                .and_then(|raw| raw.parse::<RecurrencePattern>().ok()),
        };
        let interval = interval_update.unwrap_or(current.recurrence_interval);
        let end_date = end_date_update.unwrap_or(current.recurrence_end_date);
        (pattern, interval, end_date)
    } else {
        (None, None, None)
    };

    let mut is_completed = current.is_completed;
    let mut completed_at = current.completed_at;

    match body.is_completed {
        Some(true) => match completion_transition(
            due_date,
            is_recurring,
            recurrence_pattern,
            recurrence_interval,
            recurrence_end_date,
        ) {
            // Roll the chore forward instead of completing it.
            Transition::RollForward(next) => {
                due_date = Some(next);
                is_completed = false;
                completed_at = None;
            }
            Transition::Complete => {
                is_completed = true;
                completed_at = Some(Utc::now());
            }
        },
        Some(false) => {
            is_completed = false;
            completed_at = None;
        }
        None => {}
    }

    let stored_pattern = recurrence_pattern.map(|pattern| pattern.as_str().to_string());

    // Write only what changed; the store bumps updated_at regardless.
    let changes = UpdateChore {
        title: (title != current.title).then_some(title.clone()),
        description: (description != current.description).then_some(description),
        assigned_to_id: (assigned_to_id != current.assigned_to_id).then_some(assigned_to_id),
        due_date: (due_date != current.due_date).then_some(due_date),
        is_completed: (is_completed != current.is_completed).then_some(is_completed),
        completed_at: (completed_at != current.completed_at).then_some(completed_at),
        is_recurring: (is_recurring != current.is_recurring).then_some(is_recurring),
        recurrence_pattern: (stored_pattern != current.recurrence_pattern)
            .then_some(stored_pattern),
        recurrence_interval: (recurrence_interval != current.recurrence_interval)
            .then_some(recurrence_interval),
        recurrence_end_date: (recurrence_end_date != current.recurrence_end_date)
            .then_some(recurrence_end_date),
    };

    let reassigned = matches!(assigned_to_id, Some(user_id) if current.assigned_to_id != Some(user_id));

    let mut tx = state.db.begin().await?;
    Chore::update(&mut *tx, chore_list_id, id, changes).await?;
    if let Some(user_id) = assigned_to_id.filter(|_| reassigned) {
        Notification::create(&mut *tx, assignment_notification(user_id, &title, id)).await?;
    }
    tx.commit().await?;

    let chore = Chore::find_in_list(&state.db, chore_list_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chore not found".to_string()))?;

    Ok(Json(ChoreResponse::from(chore)))
}

/// DELETE /api/chorelists/:id/chores/:choreId
pub async fn delete(
    State(state): State<AppState>,
    ApiPath((chore_list_id, id)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    if !Chore::delete(&state.db, chore_list_id, id).await? {
        return Err(ApiError::NotFound("Chore not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-01-15").unwrap(), expected);
        assert_eq!(parse_date("2024-01-15T00:00:00").unwrap(), expected);
        assert_eq!(parse_date("2024-01-15 00:00:00").unwrap(), expected);
        assert_eq!(parse_date("2024-01-15T00:00:00Z").unwrap(), expected);

        let offset = parse_date("2024-01-15T02:00:00+02:00").unwrap();
        assert_eq!(offset, expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("15/01/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_validate_interval() {
        assert_eq!(validate_interval(1).unwrap(), 1);
        assert_eq!(validate_interval(12).unwrap(), 12);
        assert!(validate_interval(0).is_err());
        assert!(validate_interval(-3).is_err());
    }

    #[test]
    fn test_parse_pattern_case_insensitive() {
        assert_eq!(parse_pattern("daily").unwrap(), RecurrencePattern::Daily);
        assert_eq!(parse_pattern("WEEKLY").unwrap(), RecurrencePattern::Weekly);
        assert!(parse_pattern("fortnightly").is_err());
    }

    fn utc(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_completing_recurring_chore_rolls_forward() {
        let transition = completion_transition(
            Some(utc(2024, 1, 1)),
            true,
            Some(RecurrencePattern::Daily),
            Some(3),
            None,
        );
        assert_eq!(transition, Transition::RollForward(utc(2024, 1, 4)));
    }

    #[test]
    fn test_next_occurrence_past_end_date_completes() {
        let transition = completion_transition(
            Some(utc(2024, 1, 1)),
            true,
            Some(RecurrencePattern::Daily),
            Some(3),
            Some(utc(2024, 1, 3)),
        );
        assert_eq!(transition, Transition::Complete);
    }

    #[test]
    fn test_occurrence_on_end_date_still_rolls_forward() {
        let transition = completion_transition(
            Some(utc(2024, 1, 1)),
            true,
            Some(RecurrencePattern::Daily),
            Some(3),
            Some(utc(2024, 1, 4)),
        );
        assert_eq!(transition, Transition::RollForward(utc(2024, 1, 4)));
    }

    #[test]
    fn test_non_recurring_chore_completes() {
        let transition = completion_transition(Some(utc(2024, 1, 1)), false, None, None, None);
        assert_eq!(transition, Transition::Complete);

        let without_due = completion_transition(
            None,
            true,
            Some(RecurrencePattern::Weekly),
            Some(1),
            None,
        );
        assert_eq!(without_due, Transition::Complete);
    }

    #[test]
    fn test_interval_defaults_to_one() {
        let transition = completion_transition(
            Some(utc(2024, 1, 1)),
            true,
            Some(RecurrencePattern::Monthly),
            None,
            None,
        );
        assert_eq!(transition, Transition::RollForward(utc(2024, 2, 1)));
    }

    fn recurring_request() -> CreateChoreRequest {
        CreateChoreRequest {
            title: "Water the plants".to_string(),
            description: String::new(),
            assigned_to_id: None,
            due_date: Some("2024-01-01".to_string()),
            is_recurring: true,
            recurrence_pattern: Some("weekly".to_string()),
            recurrence_interval: Some(2),
            recurrence_end_date: None,
        }
    }

    #[test]
    fn test_create_payload_is_trimmed() {
        let body = CreateChoreRequest {
            title: "  Take out the bins  ".to_string(),
            description: "  every thursday  ".to_string(),
            is_recurring: false,
            recurrence_pattern: None,
            recurrence_interval: None,
            recurrence_end_date: None,
            assigned_to_id: None,
            due_date: None,
        };

        let chore = body.into_chore(7).unwrap();
        assert_eq!(chore.title, "Take out the bins");
        assert_eq!(chore.description, "every thursday");
        assert_eq!(chore.chore_list_id, 7);
    }

    #[test]
    fn test_create_recurring_requires_interval() {
        let body = CreateChoreRequest {
            recurrence_interval: None,
            ..recurring_request()
        };

        let err = body.into_chore(1).unwrap_err();
        assert!(matches!(
            err,
            ApiError::BadRequest(ref message) if message == "recurrenceInterval must be >= 1."
        ));
    }

    #[test]
    fn test_create_recurring_requires_pattern() {
        let body = CreateChoreRequest {
            recurrence_pattern: None,
            ..recurring_request()
        };
        assert!(body.into_chore(1).is_err());

        let stored = recurring_request().into_chore(1).unwrap();
        assert_eq!(stored.recurrence_pattern.as_deref(), Some("Weekly"));
        assert_eq!(stored.recurrence_interval, Some(2));
    }

    #[test]
    fn test_non_recurring_create_ignores_recurrence_fields() {
        let body = CreateChoreRequest {
            is_recurring: false,
            ..recurring_request()
        };

        let chore = body.into_chore(1).unwrap();
        assert!(chore.recurrence_pattern.is_none());
        assert!(chore.recurrence_interval.is_none());
        assert!(chore.recurrence_end_date.is_none());
    }

    #[test]
    fn test_update_rejects_bad_recurrence_fields_regardless_of_state() {
        let bad_pattern = update_recurrence(Some(Some("fortnightly".to_string())), None, None);
        assert!(bad_pattern.is_err());

        let zero_interval = update_recurrence(None, Some(Some(0)), None);
        assert!(zero_interval.is_err());

        let bad_date = update_recurrence(None, None, Some(Some("not-a-date".to_string())));
        assert!(bad_date.is_err());
    }

    #[test]
    fn test_update_recurrence_passes_valid_fields_through() {
        let (pattern, interval, end_date) = update_recurrence(
            Some(Some("monthly".to_string())),
            Some(Some(3)),
            Some(None),
        )
        .unwrap();

        assert_eq!(pattern, Some(Some(RecurrencePattern::Monthly)));
        assert_eq!(interval, Some(Some(3)));
        assert_eq!(end_date, Some(None));

        let (pattern, interval, end_date) = update_recurrence(None, None, None).unwrap();
        assert!(pattern.is_none() && interval.is_none() && end_date.is_none());
    }
}
