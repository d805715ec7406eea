//! Query parameter types for API handlers.

use serde::Deserialize;

/// `GET /tasks?status=&title=`. Blank values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct TaskListParams {
    pub status: Option<String>,
    pub title: Option<String>,
}

/// `GET /tasks/search?keyword=`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
}

/// `GET /books?year=`.
#[derive(Debug, Default, Deserialize)]
pub struct BookListParams {
    pub year: Option<i32>,
}
