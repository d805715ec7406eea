use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// `POST /uploadfile`, with the request body capped at `max_upload_bytes`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/uploadfile", post(upload::upload_file))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
