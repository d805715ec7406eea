//! Handlers for the read-only book catalog.

use axum::extract::{Path, Query};
use axum::Json;
use serde::Serialize;
use taskdesk_core::catalog::{self, Author, Book};
use taskdesk_core::error::{validate_id, CoreError};
use taskdesk_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::BookListParams;

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    /// Echoes the `?year=` filter when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub books: Vec<Book>,
}

/// GET /books
pub async fn list_books(Query(params): Query<BookListParams>) -> Json<BookListResponse> {
    let books = match params.year {
        Some(year) => catalog::books_by_year(year),
        None => catalog::list_books().to_vec(),
    };
    Json(BookListResponse {
        year: params.year,
        books,
    })
}

/// GET /books/{book_id}
pub async fn get_book(Path(book_id): Path<DbId>) -> AppResult<Json<Book>> {
    validate_id("Book", book_id)?;
    catalog::find_book(book_id).map(Json).ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        })
    })
}

/// GET /author/{author_id}
pub async fn get_author(Path(author_id): Path<DbId>) -> AppResult<Json<Author>> {
    validate_id("Author", author_id)?;
    catalog::find_author(author_id).map(Json).ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Author",
            id: author_id,
        })
    })
}
