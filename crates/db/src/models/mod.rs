//! Record structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` record struct matching one CSV row
//! - A `Deserialize` + `Validate` create DTO
//! - Where partial updates exist, an update DTO with all `Option` fields

pub mod task;
pub mod user;
