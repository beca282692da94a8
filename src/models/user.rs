// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Account role, persisted and serialized as `ADMIN` / `STUDENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[default]
    Student,
}

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    /// Plain-text password, compared through `CredentialVerifier`.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    pub full_name: Option<String>,

    pub email: Option<String>,

    pub role: Role,
}

/// DTO for creating a new user (Registration).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Username length must be between 1 and 50 characters."
    ))]
    pub username: String,
    #[validate(length(
        min = 1,
        max = 128,
        message = "Password length must be between 1 and 128 characters."
    ))]
    pub password: String,
    #[validate(length(max = 100))]
    pub full_name: Option<String>,
    #[validate(email(message = "Email address is not valid."))]
    pub email: Option<String>,
    /// Defaults to `STUDENT` when omitted.
    #[serde(default)]
    pub role: Role,
}

impl CreateUserRequest {
    /// Treats blank optional fields as absent, so `"email": ""` means no email.
    pub fn normalized(mut self) -> Self {
        self.full_name = self.full_name.filter(|v| !v.trim().is_empty());
        self.email = self.email.filter(|v| !v.trim().is_empty());
        self
    }
}

/// DTO for user login.
/// Missing or `null` fields deserialize to `None` and fail as bad credentials.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
}
