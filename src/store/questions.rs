// src/store/questions.rs

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, Question},
};

/// Inserts a question. No duplicate detection.
pub async fn create(pool: &SqlitePool, req: &CreateQuestionRequest) -> Result<Question, AppError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (question, option_a, option_b, option_c, option_d, correct_answer)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, question, option_a, option_b, option_c, option_d, correct_answer
        "#,
    )
    .bind(&req.question)
    .bind(&req.option_a)
    .bind(&req.option_b)
    .bind(&req.option_c)
    .bind(&req.option_d)
    .bind(&req.correct_answer)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::from(e)
    })?;

    Ok(question)
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, option_a, option_b, option_c, option_d, correct_answer
        FROM questions
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question: {:?}", e);
            AppError::from(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    Ok(())
}

pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
