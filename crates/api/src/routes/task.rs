//! Route definitions for the task resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// ```text
/// GET    /tasks            -> list
/// GET    /tasks/search     -> search
/// POST   /task             -> create
/// GET    /task/{id}        -> get_by_id
/// PUT    /task/{id}        -> update
/// DELETE /task/{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(task::list))
        .route("/tasks/search", get(task::search))
        .route("/task", post(task::create))
        .route(
            "/task/{id}",
            get(task::get_by_id)
                .put(task::update)
                .delete(task::delete),
        )
}
