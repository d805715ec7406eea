use std::sync::Arc;

use taskdesk_db::{StoreError, TaskTable, UserTable};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// CSV-backed task store.
    pub tasks: Arc<TaskTable>,
    /// CSV-backed user store.
    pub users: Arc<UserTable>,
    /// Server configuration (upload directory, limits).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Open (creating if needed) every table named in `config`.
    pub async fn open(config: ServerConfig) -> Result<Self, StoreError> {
        let tasks = TaskTable::open(&config.tasks_file).await?;
        let users = UserTable::open(&config.users_file).await?;

        Ok(Self {
            tasks: Arc::new(tasks),
            users: Arc::new(users),
            config: Arc::new(config),
        })
    }
}
