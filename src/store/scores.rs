// src/store/scores.rs

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        score::{NewScore, Score},
        user::User,
    },
};

/// Records one attempt for an already-resolved user.
///
/// Taking `&User` rather than an id means the caller has looked the user up
/// (and reported `NotFound`) before anything is written.
pub async fn create(pool: &SqlitePool, user: &User, new: NewScore) -> Result<Score, AppError> {
    let attempt_date = new.attempt_date.unwrap_or_else(Utc::now);

    let score = sqlx::query_as::<_, Score>(
        r#"
        INSERT INTO scores (user_id, score, total_questions, attempt_date)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, score, total_questions, attempt_date
        "#,
    )
    .bind(user.id)
    .bind(new.score)
    .bind(new.total_questions)
    .bind(attempt_date)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to save score: {:?}", e);
        AppError::from(e)
    })?;

    Ok(score)
}

/// A user's attempts, most recent first. Equal timestamps keep insertion order
/// (newest insert first).
pub async fn find_by_user_ordered_by_date_desc(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Score>, AppError> {
    let scores = sqlx::query_as::<_, Score>(
        r#"
        SELECT id, user_id, score, total_questions, attempt_date
        FROM scores
        WHERE user_id = ?
        ORDER BY attempt_date DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(scores)
}

/// Highest `score` the user ever achieved, `None` if they never attempted.
pub async fn find_best_score_by_user_id(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<i64>, AppError> {
    let best = sqlx::query_scalar::<_, Option<i64>>(
        "SELECT MAX(score) FROM scores WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(best)
}

/// A user's attempts ranked by score, ties broken by the more recent attempt.
pub async fn find_top_scores_by_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Score>, AppError> {
    let scores = sqlx::query_as::<_, Score>(
        r#"
        SELECT id, user_id, score, total_questions, attempt_date
        FROM scores
        WHERE user_id = ?
        ORDER BY score DESC, attempt_date DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(scores)
}

/// Every attempt across all users, in insertion order.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Score>, AppError> {
    let scores = sqlx::query_as::<_, Score>(
        r#"
        SELECT id, user_id, score, total_questions, attempt_date
        FROM scores
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(scores)
}
