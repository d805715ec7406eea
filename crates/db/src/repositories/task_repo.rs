//! Repository for `tasks.csv`.

use taskdesk_core::search::{matches_keyword, normalize_keyword};
use taskdesk_core::types::DbId;

use crate::error::StoreError;
use crate::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
use crate::TaskTable;

/// Provides CRUD and query operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List tasks in file order, narrowed by `filter`.
    pub async fn list(table: &TaskTable, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let mut tasks = table.load().await?;
        tasks.retain(|t| filter.matches(t));
        Ok(tasks)
    }

    /// Tasks whose title or description contains `keyword`, ignoring case.
    /// A missing or blank keyword returns every task.
    pub async fn search(
        table: &TaskTable,
        keyword: Option<&str>,
    ) -> Result<Vec<Task>, StoreError> {
        let mut tasks = table.load().await?;
        if let Some(keyword) = normalize_keyword(keyword) {
            tasks.retain(|t| {
                matches_keyword(&[t.title.as_str(), t.description.as_str()], &keyword)
            });
        }
        Ok(tasks)
    }

    pub async fn find_by_id(table: &TaskTable, id: DbId) -> Result<Option<Task>, StoreError> {
        Ok(table.load().await?.into_iter().find(|t| t.id == id))
    }

    /// Append a new task with a freshly allocated id, returning it.
    pub async fn create(table: &TaskTable, input: &CreateTask) -> Result<Task, StoreError> {
        let _guard = table.lock().await;
        let mut tasks = table.load().await?;

        let task = Task {
            id: table.next_id(&tasks).await?,
            title: input.title.clone(),
            description: input.description.clone(),
            status: input.status,
        };
        tasks.push(task.clone());
        table.save(&tasks).await?;

        tracing::info!(task_id = task.id, "Task created");
        Ok(task)
    }

    /// Merge `input` into the task with `id`.
    ///
    /// Returns `None` without touching the file if no such task exists.
    pub async fn update(
        table: &TaskTable,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, StoreError> {
        let _guard = table.lock().await;
        let mut tasks = table.load().await?;

        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.apply(input);
        let updated = task.clone();
        table.save(&tasks).await?;

        tracing::info!(task_id = id, "Task updated");
        Ok(Some(updated))
    }

    /// Remove the task with `id`, returning the removed row.
    ///
    /// Returns `None` without touching the file if no such task exists.
    pub async fn delete(table: &TaskTable, id: DbId) -> Result<Option<Task>, StoreError> {
        let _guard = table.lock().await;
        let mut tasks = table.load().await?;

        let Some(pos) = tasks.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        let removed = tasks.remove(pos);
        table.save(&tasks).await?;

        tracing::info!(task_id = id, "Task deleted");
        Ok(Some(removed))
    }
}
