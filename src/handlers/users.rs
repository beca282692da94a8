// src/handlers/users.rs

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, LoginRequest, LoginResponse, Role},
    store::users,
    utils::credentials::CredentialVerifier,
};

/// Lists all users in the system.
pub async fn list_users(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let users = users::find_all(&pool).await?;
    Ok(Json(users))
}

/// Registers a new user.
///
/// Returns 201 Created and the user object (excluding password),
/// or 400 if the username is already taken.
pub async fn create_user(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    // Fast path for the common case; the UNIQUE constraint still decides races.
    if users::exists_by_username(&pool, &payload.username).await? {
        return Err(AppError::Conflict(users::USERNAME_TAKEN.to_string()));
    }

    let user = users::create(&pool, &payload).await?;
    tracing::info!("Registered user '{}' as {:?}", user.username, user.role);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Checks the credentials and returns the matching user.
///
/// No token or session is issued. A missing username or password is
/// answered like any other mismatch.
pub async fn login(
    State(pool): State<SqlitePool>,
    State(verifier): State<Arc<dyn CredentialVerifier>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let invalid = || AppError::AuthError("Invalid credentials".to_string());

    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(invalid());
    };

    let user = users::find_by_username_and_password(&pool, verifier.as_ref(), &username, &password)
        .await?
        .ok_or_else(invalid)?;

    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}

/// Lists users with the STUDENT role.
pub async fn list_students(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let students = users::find_by_role(&pool, Role::Student).await?;
    Ok(Json(students))
}
