/// User routes: registration, login, lookup, password reset
///
/// The forgot-password endpoint is deliberately uniform: whether or not
/// the email belongs to an account, the client gets the same 200 response,
/// so the endpoint cannot be used to probe for registered addresses.

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chorequest_shared::auth::password::{hash_password, verify_password};
use chorequest_shared::auth::reset_token;
use chorequest_shared::models::password_reset_token::PasswordResetToken;
use chorequest_shared::models::user::{CreateUser, User};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::ValidateEmail;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default, rename = "newPassword")]
    pub new_password: String,
}

/// Public user representation; the password hash never leaves the server
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// POST /api/users/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> ApiResult<Response> {
    let username = body.username.trim().to_string();
    let email = body.email.trim().to_string();
    let password = body.password;

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username, email, and password are required.".to_string(),
        ));
    }

    if !email.validate_email() {
        return Err(ApiError::BadRequest(
            "Email address is invalid.".to_string(),
        ));
    }

    if User::username_exists(&state.db, &username).await? {
        return Err(ApiError::BadRequest("Username already exists".to_string()));
    }
    if User::email_exists(&state.db, &email).await? {
        return Err(ApiError::BadRequest("Email already exists".to_string()));
    }

    let password_hash = hash_password(&password)?;
    let user = User::create(
        &state.db,
        CreateUser {
            username,
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Registered user '{}'", user.username);

    let location = format!("/api/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    )
        .into_response())
}

/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    let username = body.username.trim();

    if username.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username and password are required.".to_string(),
        ));
    }

    // A single message for both unknown-user and wrong-password keeps
    // valid usernames unguessable.
    let user = User::find_by_username(&state.db, username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    if !verify_password(&body.password, &user.password_hash)? {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users/:id
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users
pub async fn index(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/users/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ForgotPasswordRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let email = body.email.trim();

    if email.is_empty() {
        return Err(ApiError::BadRequest("Email is required.".to_string()));
    }
    if !email.validate_email() {
        return Err(ApiError::BadRequest(
            "Email address is invalid.".to_string(),
        ));
    }

    if let Some(user) = User::find_by_email(&state.db, email).await? {
        let token = reset_token::generate_token();
        let expires_at = Utc::now() + reset_token::token_ttl();

        PasswordResetToken::create(&state.db, user.id, &token, expires_at).await?;

        // Delivery problems must not change the response; the token is
        // stored either way and the entry can be re-sent.
        if let Err(err) = state
            .mailer
            .send_password_reset(&user.email, &user.username, &token)
            .await
        {
            tracing::warn!(user_id = user.id, "Failed to write reset mail: {}", err);
        }
    }

    Ok(Json(json!({
        "message": "If the email exists, a password reset link has been sent."
    })))
}

/// POST /api/users/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ResetPasswordRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    if body.token.is_empty() || body.new_password.is_empty() {
        return Err(ApiError::BadRequest(
            "Token and newPassword are required.".to_string(),
        ));
    }

    let record = PasswordResetToken::find_unused(&state.db, &body.token)
        .await?
        .filter(|record| !record.is_expired_at(Utc::now()))
        .ok_or_else(|| ApiError::BadRequest("Invalid or expired reset token".to_string()))?;

    let password_hash = hash_password(&body.new_password)?;

    let mut tx = state.db.begin().await?;
    User::update_password(&mut *tx, record.user_id, &password_hash).await?;
    PasswordResetToken::mark_used(&mut *tx, record.id).await?;
    tx.commit().await?;

    tracing::info!(user_id = record.user_id, "Password reset completed");

    Ok(Json(json!({
        "message": "Password has been reset successfully"
    })))
}
