//! Domain types, validation rules and pure helpers shared by the store and
//! the HTTP layer. Nothing in this crate performs I/O.

pub mod catalog;
pub mod error;
pub mod search;
pub mod task;
pub mod types;
pub mod upload;
