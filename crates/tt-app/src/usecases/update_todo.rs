use std::sync::Arc;
use tracing::{info, warn};
use tt_core::ids::TodoId;
use tt_core::ports::{RemoteTodoStorePort, TodoMirrorPort};
use tt_core::todo::{Todo, TodoPatch};

use crate::error::SyncError;
use crate::view_state::ViewStateStore;

/// Applies a partial change-set to one todo.
pub struct UpdateTodo {
    remote: Arc<dyn RemoteTodoStorePort>,
    mirror: Arc<dyn TodoMirrorPort>,
    view: Arc<ViewStateStore>,
}

impl UpdateTodo {
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

    /// Sends `patch` for `id`; only after the store accepts it are the
    /// mirror entry (if one exists) and the view entry overlaid.
    ///
    /// Returns the merged view entry, or `None` when `id` is not in the
    /// view list. An empty patch is a no-op; a blank title or category is
    /// rejected with [`SyncError::Invalid`] before anything is sent.
    #[tracing::instrument(name = "usecase.update_todo.execute", skip(self, patch), fields(todo_id = %id))]
    pub async fn execute(&self, id: &TodoId, patch: &TodoPatch) -> Result<Option<Todo>, SyncError> {
        patch.validate()?;

        if patch.is_empty() {
            return Ok(self.view.snapshot().get(id).cloned());
        }

        if let Err(e) = self.remote.update_todo(id, patch).await {
            warn!(error = %e, "Remote update failed");
            self.view.set_error(e.to_string());
            return Err(e.into());
        }

        self.merge_into_mirror(id, patch).await;

        let mut merged = None;
        self.view.modify(|state| {
            merged = state.merge_patch(id, patch);
            state.error = None;
        });

        info!("Updated todo");
        Ok(merged)
    }

    async fn merge_into_mirror(&self, id: &TodoId, patch: &TodoPatch) {
        match self.mirror.get(id).await {
            Ok(Some(existing)) => {
                if let Err(e) = self.mirror.put(&patch.applied(&existing)).await {
                    warn!(error = %e, "Failed to write merged todo to mirror");
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Failed to read todo from mirror"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{todo, MockMirror, MockRemote};
    use tt_core::ports::RemoteStoreError;
    use tt_core::todo::{Priority, TodoValidationError};

    #[tokio::test]
    async fn success_overlays_view_and_mirror() {
        let id = TodoId::from("1");
        let patch = TodoPatch::new().completed(true).priority(Priority::High);

        let mut remote = MockRemote::new();
        remote.expect_update_todo().times(1).returning(|_, _| Ok(()));
        let mut mirror = MockMirror::new();
        mirror.expect_get().returning(|_| Ok(Some(todo("1"))));
        mirror
            .expect_put()
            .withf(|t| t.completed && t.priority == Priority::High && t.title == "task 1")
            .times(1)
            .returning(|_| Ok(()));

        let view = Arc::new(ViewStateStore::new());
        view.modify(|s| s.replace_all(vec![todo("1"), todo("2")]));
        view.set_error("stale");
        let uc = UpdateTodo::from_ports(Arc::new(remote), Arc::new(mirror), view.clone());

        let merged = uc.execute(&id, &patch).await.unwrap().unwrap();

        assert_eq!(merged, patch.applied(&todo("1")));
        let state = view.snapshot();
        assert_eq!(state.get(&id), Some(&merged));
        assert_eq!(state.get(&TodoId::from("2")), Some(&todo("2")));
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn missing_mirror_entry_is_not_created() {
        let mut remote = MockRemote::new();
        remote.expect_update_todo().returning(|_, _| Ok(()));
        let mut mirror = MockMirror::new();
        mirror.expect_get().returning(|_| Ok(None));
        mirror.expect_put().times(0);

        let uc = UpdateTodo::from_ports(
            Arc::new(remote),
            Arc::new(mirror),
            Arc::new(ViewStateStore::new()),
        );

        let merged = uc
            .execute(&TodoId::from("9"), &TodoPatch::new().title("y"))
            .await
            .unwrap();

        assert!(merged.is_none());
    }

    #[tokio::test]
    async fn remote_failure_leaves_mirror_and_view_unchanged() {
        let mut remote = MockRemote::new();
        remote
            .expect_update_todo()
            .returning(|_, _| Err(RemoteStoreError::Network("timeout".into())));
        let mut mirror = MockMirror::new();
        mirror.expect_get().times(0);
        mirror.expect_put().times(0);

        let view = Arc::new(ViewStateStore::new());
        view.modify(|s| s.replace_all(vec![todo("1")]));
        let uc = UpdateTodo::from_ports(Arc::new(remote), Arc::new(mirror), view.clone());

        let err = uc
            .execute(&TodoId::from("1"), &TodoPatch::new().completed(true))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::Remote(_)));
        let state = view.snapshot();
        assert_eq!(state.todos, vec![todo("1")]);
        assert_eq!(state.error.as_deref(), Some("network error: timeout"));
    }

    #[tokio::test]
    async fn blank_title_is_rejected_before_remote_call() {
        let mut remote = MockRemote::new();
        remote.expect_update_todo().times(0);
        let mut mirror = MockMirror::new();
        mirror.expect_get().times(0);
        mirror.expect_put().times(0);

        let view = Arc::new(ViewStateStore::new());
        view.modify(|s| s.replace_all(vec![todo("1")]));
        let uc = UpdateTodo::from_ports(Arc::new(remote), Arc::new(mirror), view.clone());

        let err = uc
            .execute(&TodoId::from("1"), &TodoPatch::new().title(""))
            .await
            .unwrap_err();

        assert_eq!(err, SyncError::Invalid(TodoValidationError::EmptyTitle));
        assert_eq!(view.snapshot().todos, vec![todo("1")]);
    }

    #[tokio::test]
    async fn empty_patch_makes_no_calls() {
        let mut remote = MockRemote::new();
        remote.expect_update_todo().times(0);

        let view = Arc::new(ViewStateStore::new());
        view.modify(|s| s.replace_all(vec![todo("1")]));
        let uc = UpdateTodo::from_ports(Arc::new(remote), Arc::new(MockMirror::new()), view);

        let current = uc.execute(&TodoId::from("1"), &TodoPatch::new()).await.unwrap();

        assert_eq!(current, Some(todo("1")));
    }
}
