/// Application state and router construction
///
/// The router nests every API route under `/api`; anything else falls
/// through to the static frontend with an SPA-style index fallback.

use crate::config::Config;
use crate::error::ApiError;
use crate::mailer::Mailer;
use crate::routes;
use crate::spa;
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Password-reset mail delivery
    pub mailer: Arc<Mailer>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        let mailer = Mailer::new(&config.mail.log_file, &config.mail.reset_base_url);
        Self {
            db,
            config: Arc::new(config),
            mailer: Arc::new(mailer),
        }
    }
}

/// Builds the complete application router
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.api.cors_origins);
    let static_dir = state.config.api.static_dir.clone();

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_router())
        .fallback_service(spa::router(&static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users/register", post(routes::users::register))
        .route("/users/login", post(routes::users::login))
        .route(
            "/users/forgot-password",
            post(routes::users::forgot_password),
        )
        .route(
            "/users/reset-password",
            post(routes::users::reset_password),
        )
        .route("/users", get(routes::users::index))
        .route("/users/:id", get(routes::users::show))
        // Chore lists
        .route(
            "/chorelists",
            get(routes::chore_lists::index).post(routes::chore_lists::create),
        )
        .route(
            "/chorelists/:id",
            get(routes::chore_lists::show)
                .put(routes::chore_lists::update)
                .delete(routes::chore_lists::delete),
        )
        .route("/chorelists/:id/share", post(routes::chore_lists::share))
        .route(
            "/chorelists/:id/share/:shareId",
            delete(routes::chore_lists::remove_share),
        )
        // Chores (nested under their list)
        .route(
            "/chorelists/:id/chores",
            get(routes::chores::index).post(routes::chores::create),
        )
        .route(
            "/chorelists/:id/chores/:choreId",
            get(routes::chores::show)
                .put(routes::chores::update)
                .delete(routes::chores::delete),
        )
        // Notifications
        .route("/notifications", get(routes::notifications::index))
        .route(
            "/notifications/read-all",
            put(routes::notifications::mark_all_read),
        )
        .route(
            "/notifications/:id/read",
            put(routes::notifications::mark_as_read),
        )
        .route("/notifications/:id", delete(routes::notifications::delete))
        .fallback(api_not_found)
}

/// Unmatched `/api` paths get the JSON 404 shape, not the SPA fallback
async fn api_not_found() -> ApiError {
    ApiError::NotFound("Resource not found.".to_string())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    }
}
