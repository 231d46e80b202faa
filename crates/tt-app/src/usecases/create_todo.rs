use std::sync::Arc;
use tracing::{info, warn};
use tt_core::ports::{RemoteTodoStorePort, SessionPort, TodoMirrorPort};
use tt_core::todo::{NewTodo, Todo};

use crate::error::SyncError;
use crate::view_state::ViewStateStore;

/// Creates a todo owned by the signed-in user.
pub struct CreateTodo {
    remote: Arc<dyn RemoteTodoStorePort>,
    session: Arc<dyn SessionPort>,
    mirror: Arc<dyn TodoMirrorPort>,
    view: Arc<ViewStateStore>,
}

impl CreateTodo {
    pub fn from_ports(
        remote: Arc<dyn RemoteTodoStorePort>,
        session: Arc<dyn SessionPort>,
        mirror: Arc<dyn TodoMirrorPort>,
        view: Arc<ViewStateStore>,
    ) -> Self {
        Self {
            remote,
            session,
            mirror,
            view,
        }
    }

    /// Inserts `new` remotely and, on success, mirrors the stored row and
    /// puts it at the head of the view list.
    ///
    /// Without a session nothing is sent, written or shown, and
    /// [`SyncError::NotAuthenticated`] is returned. An invalid payload is
    /// rejected the same way with [`SyncError::Invalid`]. A remote failure
    /// is stored in the view error field; the attempted item is not kept.
    #[tracing::instrument(
        name = "usecase.create_todo.execute",
        skip(self, new),
        fields(title = %new.title)
    )]
    pub async fn execute(&self, new: NewTodo) -> Result<Todo, SyncError> {
        new.validate()?;

        let session = match self.session.current_session().await {
            Ok(Some(session)) => session,
            Ok(None) => {
                info!("No active session, todo not created");
                return Err(SyncError::NotAuthenticated);
            }
            Err(e) => {
                self.view.set_error(e.to_string());
                return Err(e.into());
            }
        };

        let created = match self.remote.insert_todo(&session.user_id, &new).await {
            Ok(todo) => todo,
            Err(e) => {
                warn!(error = %e, "Remote insert failed");
                self.view.set_error(e.to_string());
                return Err(e.into());
            }
        };

        if let Err(e) = self.mirror.put(&created).await {
            warn!(todo_id = %created.id, error = %e, "Failed to mirror created todo");
        }

        let shown = created.clone();
        self.view.modify(|state| {
            state.prepend(shown);
            state.error = None;
        });

        info!(todo_id = %created.id, "Created todo");
        Ok(created)
    }
}
