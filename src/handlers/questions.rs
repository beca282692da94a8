// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{error::AppError, models::question::CreateQuestionRequest, store::questions};

pub async fn list_questions(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let questions = questions::find_all(&pool).await?;
    Ok(Json(questions))
}

/// Adds a question to the bank.
/// The correct answer must be written exactly as one of the four options.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !payload.answer_is_an_option() {
        return Err(AppError::BadRequest(
            "Correct answer must match one of the options exactly".to_string(),
        ));
    }

    let question = questions::create(&pool, &payload).await?;

    Ok((StatusCode::CREATED, Json(question)))
}

pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    questions::delete_by_id(&pool, id).await?;
    tracing::info!("Deleted question {}", id);

    Ok(StatusCode::OK)
}

pub async fn count_questions(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let count = questions::count(&pool).await?;
    Ok(Json(count))
}
