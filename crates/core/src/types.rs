/// Record identifiers are positive integers assigned by the store.
pub type DbId = i64;
