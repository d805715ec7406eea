//! Flat-file record store.
//!
//! Every record type lives in its own CSV file which is read in full on each
//! operation and rewritten in full on each mutation. See [`table::CsvTable`].

pub mod error;
pub mod models;
pub mod repositories;
pub mod table;

pub use error::StoreError;
pub use table::{CsvTable, Record};

use models::task::Task;
use models::user::User;

pub type TaskTable = CsvTable<Task>;
pub type UserTable = CsvTable<User>;

/// Verify that a table's backing file is readable and well-formed.
pub async fn health_check<R: Record>(table: &CsvTable<R>) -> Result<(), StoreError> {
    table.load().await.map(|_| ())
}
