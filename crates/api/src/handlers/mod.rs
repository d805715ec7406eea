pub mod catalog;
pub mod task;
pub mod upload;
pub mod user;
