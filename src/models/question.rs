// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
///
/// The `Serialize` derive is also the wire format: every endpoint embeds
/// questions in exactly this shape.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question itself.
    pub question: String,

    pub answer: String,

    /// Foreign key into `categories.id`.
    pub category: i64,

    pub difficulty: i32,
}

/// DTO for creating a new question.
/// Presence checks only: the texts must be non-empty.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// DTO for the search endpoint. The field is optional so a missing
/// `searchTerm` can be reported as a client error instead of a decode
/// failure.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}
