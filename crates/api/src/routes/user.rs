//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// GET    /users            -> list
/// POST   /users            -> create
/// GET    /users/{id}       -> get_by_id
/// DELETE /users/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(user::list).post(user::create))
        .route("/users/{id}", get(user::get_by_id).delete(user::delete))
}
