// src/handlers/scores.rs

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        score::{CreateScoreRequest, NewScore, Score, ScoreResponse},
        user::User,
    },
    store::{scores, users},
};

/// Records a finished quiz attempt.
///
/// * Resolves the user first; an unknown `userId` is a 404 and nothing is written.
/// * The attempt is timestamped with the current time.
pub async fn submit_score(
    State(pool): State<SqlitePool>,
    Json(req): Json<CreateScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    if !req.score_within_total() {
        return Err(AppError::BadRequest(
            "Score cannot exceed the number of questions".to_string(),
        ));
    }

    let user = users::find_by_id(&pool, req.user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    let score = scores::create(
        &pool,
        &user,
        NewScore {
            score: req.score,
            total_questions: req.total_questions,
            attempt_date: None,
        },
    )
    .await?;

    tracing::info!(
        "Saved score {}/{} for user {}",
        score.score,
        score.total_questions,
        user.id
    );

    Ok((StatusCode::CREATED, Json(ScoreResponse::new(score, user))))
}

/// A user's attempts, newest first.
pub async fn user_history(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    // An unknown user simply has no attempts.
    let Some(user) = users::find_by_id(&pool, user_id).await? else {
        return Ok(Json(Vec::<ScoreResponse>::new()));
    };

    let history = scores::find_by_user_ordered_by_date_desc(&pool, user_id).await?;

    Ok(Json(attach_user(history, &user)))
}

/// The user's best score, or 0 when they have no attempts.
pub async fn user_best_score(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let best = scores::find_best_score_by_user_id(&pool, user_id).await?;
    Ok(Json(best.unwrap_or(0)))
}

/// A user's attempts ranked from highest score down.
pub async fn user_top_scores(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user) = users::find_by_id(&pool, user_id).await? else {
        return Ok(Json(Vec::<ScoreResponse>::new()));
    };

    let ranked = scores::find_top_scores_by_user(&pool, user_id).await?;

    Ok(Json(attach_user(ranked, &user)))
}

/// Every attempt by every user (admin view).
pub async fn all_scores(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let all = scores::find_all(&pool).await?;

    // Resolve each referenced user once instead of per score.
    let users: HashMap<i64, User> = users::find_all(&pool)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let mut response = Vec::with_capacity(all.len());
    for score in all {
        let user = users.get(&score.user_id).cloned().ok_or_else(|| {
            AppError::InternalServerError(format!(
                "Score {} references missing user {}",
                score.id, score.user_id
            ))
        })?;
        response.push(ScoreResponse::new(score, user));
    }

    Ok(Json(response))
}

fn attach_user(scores: Vec<Score>, user: &User) -> Vec<ScoreResponse> {
    scores
        .into_iter()
        .map(|s| ScoreResponse::new(s, user.clone()))
        .collect()
}
