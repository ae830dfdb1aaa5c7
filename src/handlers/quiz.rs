// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::{error::AppError, models::question::Question};

/// Payload for requesting the next quiz question.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids of questions already asked in this game.
    #[serde(default)]
    pub previous_questions: Vec<i64>,

    /// Required; an id of 0 means "any category".
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

/// Picks one unseen candidate uniformly at random.
/// `None` when every candidate has already been asked.
fn next_question(candidates: Vec<Question>, previous: &[i64]) -> Option<Question> {
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    unseen.choose(&mut thread_rng()).cloned()
}

/// Generates the next question for a quiz round.
///
/// * Candidates are all questions, or one category's when the id is non-zero.
/// * Questions already asked are never repeated.
/// * An exhausted pool yields `question: null`, not an error.
pub async fn next_quiz_question(
    State(pool): State<PgPool>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let quiz_category = req
        .quiz_category
        .ok_or_else(|| AppError::Unprocessable("quiz_category is required".to_string()))?;

    let category_filter = (quiz_category.id != 0).then_some(quiz_category.id);

    let candidates = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions
         WHERE ($1::BIGINT IS NULL OR category = $1)",
    )
    .bind(category_filter)
    .fetch_all(&pool)
    .await?;

    let question = next_question(candidates, &req.previous_questions);

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
