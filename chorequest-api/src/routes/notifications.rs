/// Notification routes: per-user feed and read/delete maintenance
///
/// Notifications are only ever created server-side, as side effects of
/// sharing a list or assigning a chore; these routes just read and prune.

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::ApiPath;
use crate::routes::{require_user_id, UserIdQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chorequest_shared::models::notification::Notification;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "isRead")]
    pub is_read: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "relatedChoreId")]
    pub related_chore_id: Option<i64>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            title: notification.title,
            message: notification.message,
            kind: notification.kind,
            is_read: notification.is_read,
            created_at: notification.created_at.to_rfc3339(),
            related_chore_id: notification.related_chore_id,
        }
    }
}

/// GET /api/notifications?userId=N
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let user_id = require_user_id(&query)?;

    let notifications = Notification::list_recent(&state.db, user_id).await?;
    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}

/// PUT /api/notifications/:id/read
pub async fn mark_as_read(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    if !Notification::mark_read(&state.db, id).await? {
        return Err(ApiError::NotFound("Notification not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/notifications/read-all?userId=N
pub async fn mark_all_read(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<StatusCode> {
    let user_id = require_user_id(&query)?;

    let updated = Notification::mark_all_read(&state.db, user_id).await?;
    tracing::debug!(user_id, updated, "Marked notifications read");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/notifications/:id
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    if !Notification::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Notification not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
