//! The synchronization layer's single entry point.

use std::sync::Arc;
use tt_core::ids::TodoId;
use tt_core::todo::{NewTodo, Todo, TodoPatch};

use crate::arbiter::KeyedLocks;
use crate::deps::{AppDeps, SyncOptions};
use crate::error::SyncError;
use crate::usecases::{CreateTodo, DeleteTodo, ListOutcome, ListTodos, UpdateTodo};
use crate::view_state::{TodoViewState, ViewStateStore};

/// Runs the use cases behind one [`KeyedLocks`], so callers that fire
/// operations without awaiting them (rapid toggling, say) still get them
/// applied per item in call order.
pub struct TodoSync {
    list: ListTodos,
    create: CreateTodo,
    update: UpdateTodo,
    delete: DeleteTodo,
    view: Arc<ViewStateStore>,
    locks: KeyedLocks,
}

impl TodoSync {
    pub fn new(deps: AppDeps, options: SyncOptions) -> Self {
        let view = Arc::new(ViewStateStore::new());
        let AppDeps {
            remote,
            session,
            mirror,
        } = deps;

        Self {
            list: ListTodos::from_ports(remote.clone(), mirror.clone(), view.clone())
                .with_pruning(options.prune_on_full_sync),
            create: CreateTodo::from_ports(
                remote.clone(),
                session,
                mirror.clone(),
                view.clone(),
            ),
            update: UpdateTodo::from_ports(remote.clone(), mirror.clone(), view.clone()),
            delete: DeleteTodo::from_ports(remote, mirror, view.clone()),
            view,
            locks: KeyedLocks::new(),
        }
    }

    pub fn view(&self) -> &Arc<ViewStateStore> {
        &self.view
    }

    pub fn snapshot(&self) -> TodoViewState {
        self.view.snapshot()
    }

    pub async fn list(&self) -> Result<ListOutcome, SyncError> {
        let _all = self.locks.lock_all().await;
        self.list.execute().await
    }

    pub async fn create(&self, new: NewTodo) -> Result<Todo, SyncError> {
        let _shared = self.locks.lock_shared().await;
        self.create.execute(new).await
    }

    pub async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Option<Todo>, SyncError> {
        let _key = self.locks.lock_key(id).await;
        self.update.execute(id, patch).await
    }

    /// Flips `completed` on the current view entry.
    ///
    /// The entry is read after the item lock is taken, so back-to-back
    /// toggles each see the previous toggle's result.
    pub async fn toggle(&self, id: &TodoId) -> Result<Option<Todo>, SyncError> {
        let _key = self.locks.lock_key(id).await;
        let current = self
            .view
            .snapshot()
            .get(id)
            .cloned()
            .ok_or_else(|| SyncError::NotInView(id.clone()))?;
        self.update
            .execute(id, &TodoPatch::toggle_completed(&current))
            .await
    }

    pub async fn delete(&self, id: &TodoId) -> Result<(), SyncError> {
        let _key = self.locks.lock_key(id).await;
        self.delete.execute(id).await
    }
}
