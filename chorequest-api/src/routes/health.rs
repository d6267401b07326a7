use crate::app::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

/// Health check endpoint
///
/// Reports whether the API can reach its database. Returns 200 with
/// `"healthy"` when the database responds, 503 with `"degraded"` otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match chorequest_shared::db::health_check(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "version": chorequest_shared::VERSION,
            })),
        ),
        Err(err) => {
            tracing::error!("Database health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "version": chorequest_shared::VERSION,
                })),
            )
        }
    }
}
