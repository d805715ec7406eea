//! Read-only book catalog served by the `/books` and `/author` endpoints.
//!
//! The catalog is fixed at compile time; there is no persistence behind it.

use serde::Serialize;

use crate::types::DbId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: &'static str,
    pub author_id: DbId,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: &'static str,
}

/* --------------------------------------------------------------------------
Catalog data
-------------------------------------------------------------------------- */

const AUTHORS: &[Author] = &[
    Author {
        id: 1,
        name: "F. Scott Fitzgerald",
    },
    Author {
        id: 2,
        name: "Ernest Hemingway",
    },
    Author {
        id: 3,
        name: "Virginia Woolf",
    },
];

const BOOKS: &[Book] = &[
    Book {
        id: 1,
        title: "The Great Gatsby",
        author_id: 1,
        year: 1925,
    },
    Book {
        id: 2,
        title: "The Sun Also Rises",
        author_id: 2,
        year: 1926,
    },
    Book {
        id: 3,
        title: "Mrs Dalloway",
        author_id: 3,
        year: 1925,
    },
    Book {
        id: 4,
        title: "To the Lighthouse",
        author_id: 3,
        year: 1927,
    },
    Book {
        id: 5,
        title: "A Farewell to Arms",
        author_id: 2,
        year: 1929,
    },
];

/* --------------------------------------------------------------------------
Lookups
-------------------------------------------------------------------------- */

pub fn list_books() -> &'static [Book] {
    BOOKS
}

/// All books published in `year`, in catalog order.
pub fn books_by_year(year: i32) -> Vec<Book> {
    BOOKS.iter().filter(|b| b.year == year).copied().collect()
}

pub fn find_book(id: DbId) -> Option<Book> {
    BOOKS.iter().find(|b| b.id == id).copied()
}

pub fn find_author(id: DbId) -> Option<Author> {
    AUTHORS.iter().find(|a| a.id == id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_book_has_a_known_author() {
        for book in list_books() {
            assert!(
                find_author(book.author_id).is_some(),
                "book {} references missing author {}",
                book.id,
                book.author_id
            );
        }
    }

    #[test]
    fn books_by_year_filters() {
        let books = books_by_year(1925);
        assert_eq!(books.len(), 2);
        assert!(books.iter().all(|b| b.year == 1925));
        assert!(books_by_year(1800).is_empty());
    }

    #[test]
    fn find_book_by_id() {
        assert_eq!(find_book(1).map(|b| b.title), Some("The Great Gatsby"));
        assert_eq!(find_book(999), None);
    }

    #[test]
    fn find_author_by_id() {
        assert_eq!(find_author(2).map(|a| a.name), Some("Ernest Hemingway"));
        assert_eq!(find_author(0), None);
    }
}
