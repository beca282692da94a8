// src/store/users.rs

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, Role, User},
    utils::credentials::CredentialVerifier,
};

const USER_COLUMNS: &str = "id, username, password, full_name, email, role";

/// Conflict message for a duplicate username, whichever check catches it.
pub const USERNAME_TAKEN: &str = "Username already exists";

/// Inserts a user. The UNIQUE constraint on `username` makes the
/// duplicate check and the insert one atomic step.
pub async fn create(pool: &SqlitePool, req: &CreateUserRequest) -> Result<User, AppError> {
    let sql = format!(
        "INSERT INTO users (username, password, full_name, email, role) \
         VALUES (?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
    );

    sqlx::query_as::<_, User>(&sql)
        .bind(&req.username)
        .bind(&req.password)
        .bind(&req.full_name)
        .bind(&req.email)
        .bind(req.role)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(USERNAME_TAKEN.to_string())
            }
            e => {
                tracing::error!("Failed to create user: {:?}", e);
                AppError::from(e)
            }
        })
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Returns the user only when both the username exists and the verifier
/// accepts the password. Callers cannot tell which of the two failed.
pub async fn find_by_username_and_password(
    pool: &SqlitePool,
    verifier: &dyn CredentialVerifier,
    username: &str,
    password: &str,
) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user.filter(|u| verifier.verify(password, &u.password)))
}

pub async fn find_by_role(pool: &SqlitePool, role: Role) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE role = ? ORDER BY id"
    ))
    .bind(role)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn exists_by_username(pool: &SqlitePool, username: &str) -> Result<bool, AppError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)",
    )
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
