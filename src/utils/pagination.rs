// src/utils/pagination.rs

use serde::Deserialize;

/// Fixed page size for every paginated endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query-string schema for paginated endpoints (`?page=N`, 1-based).
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

impl PageParams {
    /// Requested page, defaulting to the first. Page 0 is coerced to 1.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1) as usize
    }
}

/// Returns the window of `items` for the given 1-based page.
///
/// A page past the end of the sequence yields an empty slice; the caller
/// decides whether empty means "not found".
pub fn paginate<T>(page: usize, items: &[T]) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
