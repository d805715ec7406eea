//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept the record's [`CsvTable`](crate::table::CsvTable) as the
//! first argument. "Not found" is `Ok(None)`; `Err` means the backing file
//! could not be read or written.

pub mod task_repo;
pub mod user_repo;

pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
