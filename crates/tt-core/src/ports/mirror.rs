//! Local mirror port - client-resident copy of remote rows.

use async_trait::async_trait;

use super::errors::MirrorError;
use crate::ids::TodoId;
use crate::todo::Todo;

/// Key-value cache of [`Todo`]s keyed by [`TodoId`].
///
/// The mirror never evicts. Deleting an entry leaves a tombstone so that a
/// later bulk overwrite carrying a stale copy of the row cannot bring it
/// back; tombstoned ids are skipped by [`put_all`](Self::put_all) and never
/// returned by reads.
#[async_trait]
pub trait TodoMirrorPort: Send + Sync {
    /// Inserts or overwrites every entry. Entries not in `todos` are kept.
    async fn put_all(&self, todos: &[Todo]) -> Result<(), MirrorError>;

    async fn get(&self, id: &TodoId) -> Result<Option<Todo>, MirrorError>;

    /// Inserts or overwrites one entry.
    async fn put(&self, todo: &Todo) -> Result<(), MirrorError>;

    /// Removes one entry and records its tombstone.
    async fn delete(&self, id: &TodoId) -> Result<(), MirrorError>;

    /// Every live entry, newest `created_at` first.
    async fn get_all(&self) -> Result<Vec<Todo>, MirrorError>;

    /// Removes every entry whose id is not in `keep`. Returns how many were
    /// removed. No tombstones are written: the rows were never seen deleted.
    async fn prune_except(&self, keep: &[TodoId]) -> Result<usize, MirrorError>;
}
