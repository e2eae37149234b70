//! Authentication route handlers.
//!
//! Registration, login, and current-user lookup. All heavy lifting happens
//! in the auth service; handlers translate between HTTP and the service.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::middleware::AuthBearer;
use crate::models::User;
use crate::state::AppState;

// =============================================================================
// Payload Types
// =============================================================================

/// Registration payload.
///
/// Fields default to empty strings so that missing fields surface as the
/// service's field validation (400) rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle `POST /register`.
///
/// Creates a customer account and returns the public user view. The response
/// never carries password material.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state
        .auth()
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    tracing::info!(user_id = %user.user_id, "user registered");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Handle `POST /login`.
///
/// Verifies credentials and returns a bearer token plus the public user
/// view. Unknown email and wrong password are indistinguishable to the
/// caller.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    let outcome = state
        .auth()
        .login(&payload.email, &payload.password)
        .await?;

    tracing::info!(user_id = %outcome.user.user_id, "user logged in");

    Ok(Json(AuthResponse {
        token: outcome.token,
        user: outcome.user,
    }))
}

/// Handle `GET /me`.
///
/// Returns the user identified by the presented bearer token.
pub async fn me(
    State(state): State<AppState>,
    AuthBearer(claims): AuthBearer,
) -> Result<Json<User>, AppError> {
    let user = state.auth().current_user(&claims.sub).await?;

    Ok(Json(user))
}
