//! Repository for `users.csv`.

use taskdesk_core::types::DbId;

use crate::error::StoreError;
use crate::models::user::{CreateUser, User};
use crate::UserTable;

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    pub async fn list(table: &UserTable) -> Result<Vec<User>, StoreError> {
        table.load().await
    }

    pub async fn find_by_id(table: &UserTable, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(table.load().await?.into_iter().find(|u| u.id == id))
    }

    pub async fn create(table: &UserTable, input: &CreateUser) -> Result<User, StoreError> {
        let _guard = table.lock().await;
        let mut users = table.load().await?;

        let user = User {
            id: table.next_id(&users).await?,
            name: input.name.clone(),
            email: input.email.clone(),
        };
        users.push(user.clone());
        table.save(&users).await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Remove the user with `id`. Returns `None` if no such user exists.
    pub async fn delete(table: &UserTable, id: DbId) -> Result<Option<User>, StoreError> {
        let _guard = table.lock().await;
        let mut users = table.load().await?;

        let Some(pos) = users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        let removed = users.remove(pos);
        table.save(&users).await?;

        tracing::info!(user_id = id, "User deleted");
        Ok(Some(removed))
    }
}
