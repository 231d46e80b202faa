//! Remote table port - the authoritative store for todo items.

use async_trait::async_trait;

use super::errors::RemoteStoreError;
use crate::ids::{OwnerId, TodoId};
use crate::todo::{NewTodo, Todo, TodoPatch};

/// Row-oriented access to the hosted `todos` table.
///
/// Row-level access rules are enforced server-side; implementations only
/// carry the caller's session credentials.
#[async_trait]
pub trait RemoteTodoStorePort: Send + Sync {
    /// All rows visible to the session, newest `created_at` first.
    async fn list_todos(&self) -> Result<Vec<Todo>, RemoteStoreError>;

    /// Inserts one row stamped with `owner` and returns it as stored, with
    /// the store-assigned `id` and `created_at`.
    async fn insert_todo(&self, owner: &OwnerId, todo: &NewTodo)
        -> Result<Todo, RemoteStoreError>;

    /// Applies `patch` to the row matching `id`.
    async fn update_todo(&self, id: &TodoId, patch: &TodoPatch) -> Result<(), RemoteStoreError>;

    /// Deletes the row matching `id`. Whether a missing row is an error is
    /// up to the store.
    async fn delete_todo(&self, id: &TodoId) -> Result<(), RemoteStoreError>;
}
