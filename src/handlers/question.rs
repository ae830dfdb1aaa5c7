// src/handlers/question.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        category::{Category, label_map},
        question::{CreateQuestionRequest, Question, SearchRequest},
    },
    utils::pagination::{PageParams, paginate},
};

/// All questions in id order; the source sequence for every paginated view.
async fn all_questions(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Lists questions one page at a time, together with the total count and the
/// id→label category mapping.
pub async fn list_questions(
    State(pool): State<PgPool>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let selection = all_questions(&pool).await?;
    let current = paginate(params.page(), &selection);

    if current.is_empty() {
        return Err(AppError::NotFound(format!(
            "no questions on page {}",
            params.page()
        )));
    }

    let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories")
        .fetch_all(&pool)
        .await?;

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_question": selection.len(),
        "current_category": [],
        "category": label_map(&categories),
    })))
}

/// Deletes a question by id and returns the refreshed current page.
///
/// Deleting an id that does not exist is a failed mutation, not a missing
/// resource, so it reports 422.
pub async fn delete_question(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Query(params) = params?;

    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::Unprocessable(e.to_string())
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::Unprocessable(format!(
            "question {} does not exist",
            id
        )));
    }

    let selection = all_questions(&pool).await?;
    let current = paginate(params.page(), &selection);

    Ok(Json(json!({
        "success": true,
        "deleted_question": id,
        "question": current,
        "total_questions": selection.len(),
    })))
}

/// Creates a new question.
///
/// * Texts must be non-empty (presence checks only).
/// * The category must exist; the foreign key rejects everything else.
pub async fn create_question(
    State(pool): State<PgPool>,
    params: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let Json(payload) = payload?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Unprocessable(validation_errors.to_string()));
    }

    let new_id: i64 = sqlx::query_scalar(
        "INSERT INTO questions (question, answer, category, difficulty)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(&payload.question)
    .bind(&payload.answer)
    .bind(payload.category)
    .bind(payload.difficulty)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::Unprocessable(e.to_string())
    })?;

    let selection = all_questions(&pool).await?;
    let current = paginate(params.page(), &selection);

    Ok(Json(json!({
        "success": true,
        "new_question": new_id,
        "current_question": current,
        "total_question": selection.len(),
    })))
}

/// Case-insensitive substring search over question text.
/// An empty match list is a normal 200, not an error.
pub async fn search_questions(
    State(pool): State<PgPool>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let term = payload
        .search_term
        .ok_or_else(|| AppError::BadRequest("searchTerm is required".to_string()))?;

    let matches = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions
         WHERE question ILIKE $1
         ORDER BY id",
    )
    .bind(format!("%{}%", term))
    .fetch_all(&pool)
    .await?;

    let total = matches.len();

    Ok(Json(json!({
        "success": true,
        "questions": matches,
        "total_questions": total,
        "current_category": null,
    })))
}
