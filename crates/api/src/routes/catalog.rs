use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// ```text
/// GET    /books                -> list_books
/// GET    /books/{book_id}      -> get_book
/// GET    /author/{author_id}   -> get_author
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(catalog::list_books))
        .route("/books/{book_id}", get(catalog::get_book))
        .route("/author/{author_id}", get(catalog::get_author))
}
