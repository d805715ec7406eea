//! Handlers for the `/tasks` and `/task` resources.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskdesk_core::error::{validate_id, CoreError};
use taskdesk_core::task::parse_status_filter;
use taskdesk_core::types::DbId;
use taskdesk_db::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
use taskdesk_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::{SearchParams, TaskListParams};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

/// GET /tasks
///
/// Optional exact-match filters: `?status=` and `?title=`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<Vec<Task>>> {
    let filter = TaskFilter {
        status: parse_status_filter(params.status.as_deref())?,
        title: params.title.filter(|t| !t.trim().is_empty()),
    };
    let tasks = TaskRepo::list(&state.tasks, &filter).await?;
    Ok(Json(tasks))
}

/// GET /tasks/search
///
/// Case-insensitive keyword match over title and description.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::search(&state.tasks, params.keyword.as_deref()).await?;
    tracing::debug!(keyword = ?params.keyword, results = tasks.len(), "Task search");
    Ok(Json(tasks))
}

/// GET /task/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    validate_id("Task", id)?;
    let task = TaskRepo::find_by_id(&state.tasks, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(task))
}

/// POST /task
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.tasks, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /task/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    validate_id("Task", id)?;
    let task = TaskRepo::update(&state.tasks, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(task))
}

/// DELETE /task/{id}
///
/// Responds with the removed task.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    validate_id("Task", id)?;
    let task = TaskRepo::delete(&state.tasks, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(task))
}
