use std::sync::Arc;
use tracing::{info, warn};
use tt_core::ids::TodoId;
use tt_core::ports::{RemoteTodoStorePort, TodoMirrorPort};

use crate::error::SyncError;
use crate::view_state::ViewStateStore;

/// Removes a todo from the store, then the mirror, then the view, in that
/// order. A remote failure stops the chain.
pub struct DeleteTodo {
    remote: Arc<dyn RemoteTodoStorePort>,
    mirror: Arc<dyn TodoMirrorPort>,
    view: Arc<ViewStateStore>,
}

impl DeleteTodo {
    pub fn from_ports(
        remote: Arc<dyn RemoteTodoStorePort>,
        mirror: Arc<dyn TodoMirrorPort>,
        view: Arc<ViewStateStore>,
    ) -> Self {
        Self {
            remote,
            mirror,
            view,
        }
    }

    #[tracing::instrument(name = "usecase.delete_todo.execute", skip(self), fields(todo_id = %id))]
    pub async fn execute(&self, id: &TodoId) -> Result<(), SyncError> {
        if let Err(e) = self.remote.delete_todo(id).await {
            warn!(error = %e, "Remote delete failed");
            self.view.set_error(e.to_string());
            return Err(e.into());
        }

        if let Err(e) = self.mirror.delete(id).await {
            warn!(error = %e, "Failed to delete todo from mirror");
        }

        self.view.modify(|state| {
            state.remove(id);
            state.error = None;
        });

        info!("Deleted todo");
        Ok(())
    }
}
