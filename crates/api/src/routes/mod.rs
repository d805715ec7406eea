pub mod catalog;
pub mod health;
pub mod task;
pub mod upload;
pub mod user;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the resource route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /tasks                     list (?status=&title=)
/// /tasks/search              keyword search (?keyword=)
/// /task                      create
/// /task/{id}                 get, update, delete
///
/// /users                     list, create
/// /users/{id}                get, delete
///
/// /books                     list (?year=)
/// /books/{book_id}           get
/// /author/{author_id}        get
///
/// /uploadfile                multipart upload
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(task::router())
        .merge(user::router())
        .merge(catalog::router())
        .merge(upload::router(config.max_upload_bytes))
}
