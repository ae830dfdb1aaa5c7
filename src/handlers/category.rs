// src/handlers/category.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{
        category::{Category, label_map},
        question::Question,
    },
    utils::pagination::{PageParams, paginate},
};

/// Lists all categories as an id→label mapping, sorted by label.
/// An empty table is reported as 404 rather than an empty 200.
pub async fn list_categories(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY type")
        .fetch_all(&pool)
        .await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("no categories exist".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "code": 200,
        "categories": label_map(&categories),
    })))
}

/// Lists one category's questions, paginated.
pub async fn list_category_questions(
    State(pool): State<PgPool>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Query(params) = params?;

    let category = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound(format!("category {} not found", id)))?;

    let labels: Vec<String> = sqlx::query_scalar("SELECT type FROM categories ORDER BY id")
        .fetch_all(&pool)
        .await?;

    let selection = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions
         WHERE category = $1
         ORDER BY id",
    )
    .bind(id)
    .fetch_all(&pool)
    .await?;

    let current = paginate(params.page(), &selection);
    if current.is_empty() {
        return Err(AppError::NotFound(format!(
            "no questions on page {} for category {}",
            params.page(),
            id
        )));
    }

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": selection.len(),
        "categories": labels,
        "current_category": category,
    })))
}
