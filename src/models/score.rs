// src/models/score.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::user::User;

/// Represents the 'scores' table in the database.
/// One row per quiz attempt; `user_id` references `users.id`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: i64,
    pub user_id: i64,

    /// Number of correctly answered questions.
    pub score: i64,
    pub total_questions: i64,
    pub attempt_date: DateTime<Utc>,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        percentage(self.score, self.total_questions)
    }
}

/// `score / total * 100`, or 0.0 when there were no questions.
pub fn percentage(score: i64, total_questions: i64) -> f64 {
    if total_questions > 0 {
        score as f64 / total_questions as f64 * 100.0
    } else {
        0.0
    }
}

/// Input for recording an attempt. The user is passed separately, already resolved.
#[derive(Debug, Clone)]
pub struct NewScore {
    pub score: i64,
    pub total_questions: i64,
    /// Defaults to the current time when `None`.
    pub attempt_date: Option<DateTime<Utc>>,
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateScoreRequest {
    pub user_id: i64,
    #[validate(range(min = 0))]
    pub score: i64,
    #[validate(range(min = 0))]
    pub total_questions: i64,
}

impl CreateScoreRequest {
    pub fn score_within_total(&self) -> bool {
        self.score <= self.total_questions
    }
}

/// Score as returned to clients: the referenced user is resolved and
/// the percentage derived at read time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub id: i64,
    pub user: User,
    pub score: i64,
    pub total_questions: i64,
    pub attempt_date: DateTime<Utc>,
    pub percentage: f64,
}

impl ScoreResponse {
    pub fn new(score: Score, user: User) -> Self {
        let percentage = score.percentage();
        Self {
            id: score.id,
            user,
            score: score.score,
            total_questions: score.total_questions,
            attempt_date: score.attempt_date,
            percentage,
        }
    }
}
