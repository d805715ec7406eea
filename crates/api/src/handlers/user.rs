//! Handlers for the `/users` resource.
//!
//! Responses use [`UserResponse`], so stored email addresses never leave
//! the server.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskdesk_core::error::{validate_id, CoreError};
use taskdesk_core::types::DbId;
use taskdesk_db::models::user::{CreateUser, UserResponse};
use taskdesk_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.users).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    validate_id("User", id)?;
    let user = UserRepo::find_by_id(&state.users, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(user.into()))
}

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = UserRepo::create(&state.users, &input).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// DELETE /users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    validate_id("User", id)?;
    let user = UserRepo::delete(&state.users, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(user.into()))
}
