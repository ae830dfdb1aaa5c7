// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use std::collections::BTreeMap;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display label (e.g., "Science", "History").
    /// Mapped from the database column 'type' since `type` is a reserved
    /// keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Builds the `{id: label}` mapping used by the category and question list
/// endpoints. `BTreeMap` keeps the keys in id order.
pub fn label_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.category_type.clone()))
        .collect()
}
