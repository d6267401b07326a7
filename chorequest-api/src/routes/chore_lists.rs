/// Chore list routes: CRUD plus sharing
///
/// List responses are hydrated with chore counts and the full share list in
/// two batched queries, so rendering N lists never costs N round trips.

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath};
use crate::routes::{require_user_id, UserIdQuery};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chorequest_shared::models::chore_list::{
    ChoreList, CreateChoreList, UpdateChoreList,
};
use chorequest_shared::models::chore_list_share::{
    ChoreListShare, CreateShare, SharePermission,
};
use chorequest_shared::models::notification::{CreateNotification, Notification, NotificationType};
use chorequest_shared::models::user::User;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Deserialize)]
pub struct CreateChoreListRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CreateChoreListRequest {
    /// Trims the payload; the name must survive trimming
    fn into_parts(self) -> ApiResult<(String, String)> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::BadRequest("Name is required.".to_string()));
        }
        Ok((name, self.description.trim().to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateChoreListRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateChoreListRequest {
    /// Trims present fields; an explicit empty name is rejected
    fn into_changes(self) -> ApiResult<UpdateChoreList> {
        let name = match self.name {
            Some(raw) => {
                let name = raw.trim().to_string();
                if name.is_empty() {
                    return Err(ApiError::BadRequest("Name cannot be empty.".to_string()));
                }
                Some(name)
            }
            None => None,
        };

        Ok(UpdateChoreList {
            name,
            description: self.description.map(|raw| raw.trim().to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    #[serde(rename = "sharedWithUserId")]
    pub shared_with_user_id: Option<i64>,
    pub permission: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub id: i64,
    #[serde(rename = "choreListId")]
    pub chore_list_id: i64,
    #[serde(rename = "sharedWithUserId")]
    pub shared_with_user_id: i64,
    #[serde(rename = "sharedWithUsername")]
    pub shared_with_username: String,
    pub permission: String,
    #[serde(rename = "sharedAt")]
    pub shared_at: String,
}

impl From<ChoreListShare> for ShareResponse {
    fn from(share: ChoreListShare) -> Self {
        Self {
            id: share.id,
            chore_list_id: share.chore_list_id,
            shared_with_user_id: share.shared_with_user_id,
            shared_with_username: share.shared_with_username,
            permission: share.permission,
            shared_at: share.shared_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChoreListResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "ownerId")]
    pub owner_id: i64,
    #[serde(rename = "ownerUsername")]
    pub owner_username: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(rename = "choreCount")]
    pub chore_count: i64,
    #[serde(rename = "completedChoreCount")]
    pub completed_chore_count: i64,
    pub shares: Vec<ShareResponse>,
}

/// Attaches chore counts and shares to a batch of lists
async fn hydrate(state: &AppState, lists: Vec<ChoreList>) -> ApiResult<Vec<ChoreListResponse>> {
    let ids: Vec<i64> = lists.iter().map(|list| list.id).collect();

    let mut counts: HashMap<i64, (i64, i64)> = ChoreList::chore_counts(&state.db, &ids)
        .await?
        .into_iter()
        .map(|row| (row.chore_list_id, (row.total, row.completed)))
        .collect();

    let mut shares: HashMap<i64, Vec<ShareResponse>> = HashMap::new();
    for share in ChoreListShare::list_for_lists(&state.db, &ids).await? {
        shares
            .entry(share.chore_list_id)
            .or_default()
            .push(ShareResponse::from(share));
    }

    Ok(lists
        .into_iter()
        .map(|list| {
            let (total, completed) = counts.remove(&list.id).unwrap_or((0, 0));
            ChoreListResponse {
                id: list.id,
                name: list.name,
                description: list.description,
                owner_id: list.owner_id,
                owner_username: list.owner_username,
                created_at: list.created_at.to_rfc3339(),
                updated_at: list.updated_at.to_rfc3339(),
                chore_count: total,
                completed_chore_count: completed,
                shares: shares.remove(&list.id).unwrap_or_default(),
            }
        })
        .collect())
}

async fn hydrate_one(state: &AppState, list: ChoreList) -> ApiResult<ChoreListResponse> {
    let mut hydrated = hydrate(state, vec![list]).await?;
    hydrated
        .pop()
        .ok_or_else(|| ApiError::Internal("Hydration dropped a chore list".to_string()))
}

/// GET /api/chorelists?userId=N
///
/// Owned lists first, then lists shared with the user. A list the user
/// both owns and was (erroneously) shared keeps its first appearance.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<Vec<ChoreListResponse>>> {
    let user_id = require_user_id(&query)?;

    let mut seen: HashSet<i64> = HashSet::new();
    let mut lists = Vec::new();

    for list in ChoreList::list_owned_by(&state.db, user_id).await? {
        seen.insert(list.id);
        lists.push(list);
    }
    for list in ChoreList::list_shared_with(&state.db, user_id).await? {
        if seen.insert(list.id) {
            lists.push(list);
        }
    }

    Ok(Json(hydrate(&state, lists).await?))
}

/// GET /api/chorelists/:id
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<ChoreListResponse>> {
    let list = ChoreList::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chore list not found".to_string()))?;

    Ok(Json(hydrate_one(&state, list).await?))
}

/// POST /api/chorelists?userId=N
pub async fn create(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    ApiJson(body): ApiJson<CreateChoreListRequest>,
) -> ApiResult<Response> {
    let owner_id = require_user_id(&query)?;
    if !User::exists(&state.db, owner_id).await? {
        return Err(ApiError::BadRequest("User not found".to_string()));
    }

    let (name, description) = body.into_parts()?;

    let id = ChoreList::create(
        &state.db,
        CreateChoreList {
            name,
            description,
            owner_id,
        },
    )
    .await?;

    let list = ChoreList::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::Internal("Created chore list vanished".to_string()))?;

    tracing::info!(list_id = id, owner_id, "Created chore list '{}'", list.name);

    let location = format!("/api/chorelists/{}", id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(hydrate_one(&state, list).await?),
    )
        .into_response())
}

/// PUT /api/chorelists/:id
///
/// An empty payload is still a valid update; it only bumps `updatedAt`.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<UpdateChoreListRequest>,
) -> ApiResult<Json<ChoreListResponse>> {
    if !ChoreList::exists(&state.db, id).await? {
        return Err(ApiError::NotFound("Chore list not found".to_string()));
    }

    ChoreList::update(&state.db, id, body.into_changes()?).await?;

    let list = ChoreList::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chore list not found".to_string()))?;

    Ok(Json(hydrate_one(&state, list).await?))
}

/// DELETE /api/chorelists/:id
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    if !ChoreList::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Chore list not found".to_string()));
    }

    tracing::info!(list_id = id, "Deleted chore list");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/chorelists/:id/share
pub async fn share(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<ShareRequest>,
) -> ApiResult<Json<ShareResponse>> {
    let list = ChoreList::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chore list not found".to_string()))?;

    let shared_with_user_id = body
        .shared_with_user_id
        .ok_or_else(|| ApiError::BadRequest("sharedWithUserId is required.".to_string()))?;

    if !User::exists(&state.db, shared_with_user_id).await? {
        return Err(ApiError::BadRequest("User not found".to_string()));
    }
    if ChoreListShare::exists_for(&state.db, id, shared_with_user_id).await? {
        return Err(ApiError::BadRequest(
            "List already shared with this user".to_string(),
        ));
    }

    // Unknown permission strings fall back to view access.
    let permission = body
        .permission
        .as_deref()
        .and_then(|raw| raw.parse::<SharePermission>().ok())
        .unwrap_or_default();

    let mut tx = state.db.begin().await?;
    let share_id = ChoreListShare::create(
        &mut *tx,
        CreateShare {
            chore_list_id: id,
            shared_with_user_id,
            permission,
        },
    )
    .await?;
    Notification::create(
        &mut *tx,
        CreateNotification {
            user_id: shared_with_user_id,
            title: "Chore List Shared".to_string(),
            message: format!("A chore list '{}' has been shared with you", list.name),
            kind: NotificationType::ListShared,
            related_chore_id: None,
        },
    )
    .await?;
    tx.commit().await?;

    let share = ChoreListShare::find_by_id(&state.db, share_id)
        .await?
        .ok_or_else(|| ApiError::Internal("Created share vanished".to_string()))?;

    tracing::info!(
        list_id = id,
        shared_with_user_id,
        "Shared chore list with {} access",
        permission
    );

    Ok(Json(ShareResponse::from(share)))
}

/// DELETE /api/chorelists/:id/share/:shareId
pub async fn remove_share(
    State(state): State<AppState>,
    ApiPath((id, share_id)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    if !ChoreListShare::delete(&state.db, id, share_id).await? {
        return Err(ApiError::NotFound("Share not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_uses_shares_key() {
        let response = ChoreListResponse {
            id: 1,
            name: "Kitchen".to_string(),
            description: String::new(),
            owner_id: 2,
            owner_username: "alice".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
            chore_count: 0,
            completed_chore_count: 0,
            shares: Vec::new(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("shares").is_some());
        assert!(json.get("sharedWith").is_none());
    }

    #[test]
    fn test_create_payload_is_trimmed() {
        let body = CreateChoreListRequest {
            name: "  Kitchen  ".to_string(),
            description: "  weekly jobs  ".to_string(),
        };

        let (name, description) = body.into_parts().unwrap();
        assert_eq!(name, "Kitchen");
        assert_eq!(description, "weekly jobs");
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let body = CreateChoreListRequest {
            name: "   ".to_string(),
            description: String::new(),
        };
        assert!(body.into_parts().is_err());
    }

    #[test]
    fn test_update_trims_and_rejects_blank_name() {
        let body = UpdateChoreListRequest {
            name: Some("  Garage  ".to_string()),
            description: Some("  cars and tools  ".to_string()),
        };

        let changes = body.into_changes().unwrap();
        assert_eq!(changes.name.as_deref(), Some("Garage"));
        assert_eq!(changes.description.as_deref(), Some("cars and tools"));

        let blank = UpdateChoreListRequest {
            name: Some("   ".to_string()),
            description: None,
        };
        assert!(blank.into_changes().is_err());

        let absent = UpdateChoreListRequest {
            name: None,
            description: None,
        };
        let changes = absent.into_changes().unwrap();
        assert!(changes.name.is_none() && changes.description.is_none());
    }
}
