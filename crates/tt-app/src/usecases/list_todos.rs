use std::sync::Arc;
use tracing::{info, warn};
use tt_core::ids::TodoId;
use tt_core::ports::{RemoteStoreError, RemoteTodoStorePort, TodoMirrorPort};
use tt_core::todo::Todo;

use crate::error::SyncError;
use crate::view_state::ViewStateStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSource {
    Remote,
    /// Served from the local mirror because the remote list failed.
    Mirror { error: RemoteStoreError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListOutcome {
    pub todos: Vec<Todo>,
    pub source: TodoSource,
}

impl ListOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self.source, TodoSource::Mirror { .. })
    }
}

/// Fetches every todo and mirrors it locally, falling back to the mirror
/// when the remote store cannot be reached.
pub struct ListTodos {
    remote: Arc<dyn RemoteTodoStorePort>,
    mirror: Arc<dyn TodoMirrorPort>,
    view: Arc<ViewStateStore>,
    prune_on_full_sync: bool,
}

impl ListTodos {
    pub fn from_ports(
        remote: Arc<dyn RemoteTodoStorePort>,
        mirror: Arc<dyn TodoMirrorPort>,
        view: Arc<ViewStateStore>,
    ) -> Self {
        Self {
            remote,
            mirror,
            view,
            prune_on_full_sync: false,
        }
    }

    pub fn with_pruning(mut self, prune_on_full_sync: bool) -> Self {
        self.prune_on_full_sync = prune_on_full_sync;
        self
    }

    /// Replaces the view list with the remote rows, newest first.
    ///
    /// On remote failure the whole mirror is served instead and the remote
    /// error is both stored in the view and returned in the outcome. Only
    /// when the mirror cannot be read either does this return `Err`; the
    /// view list is then left as it was.
    #[tracing::instrument(name = "usecase.list_todos.execute", skip(self))]
    pub async fn execute(&self) -> Result<ListOutcome, SyncError> {
        let _loading = self.view.begin_loading();

        match self.remote.list_todos().await {
            Ok(todos) => {
                self.mirror_fetched(&todos).await;
                let shown = todos.clone();
                self.view.modify(|state| {
                    state.replace_all(shown);
                    state.error = None;
                });
                info!(count = todos.len(), "Listed todos from remote store");
                Ok(ListOutcome {
                    todos,
                    source: TodoSource::Remote,
                })
            }
            Err(remote_err) => {
                warn!(error = %remote_err, "Remote list failed, serving local mirror");
                match self.mirror.get_all().await {
                    Ok(cached) => {
                        let shown = cached.clone();
                        let message = remote_err.to_string();
                        self.view.modify(|state| {
                            state.replace_all(shown);
                            state.error = Some(message);
                        });
                        info!(count = cached.len(), "Served todos from local mirror");
                        Ok(ListOutcome {
                            todos: cached,
                            source: TodoSource::Mirror { error: remote_err },
                        })
                    }
                    Err(mirror_err) => {
                        let err = SyncError::Offline {
                            remote: remote_err,
                            mirror: mirror_err,
                        };
                        self.view.set_error(err.to_string());
                        Err(err)
                    }
                }
            }
        }
    }

    async fn mirror_fetched(&self, todos: &[Todo]) {
        if let Err(e) = self.mirror.put_all(todos).await {
            warn!(error = %e, "Failed to mirror fetched todos");
            return;
        }

        if self.prune_on_full_sync {
            let keep: Vec<TodoId> = todos.iter().map(|t| t.id.clone()).collect();
            match self.mirror.prune_except(&keep).await {
                Ok(0) => {}
                Ok(removed) => info!(removed, "Pruned mirror entries missing from remote"),
                Err(e) => warn!(error = %e, "Failed to prune local mirror"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{todo, MockMirror, MockRemote};
    use tt_core::ports::MirrorError;

    fn use_case(remote: MockRemote, mirror: MockMirror) -> (ListTodos, Arc<ViewStateStore>) {
        let view = Arc::new(ViewStateStore::new());
        let uc = ListTodos::from_ports(Arc::new(remote), Arc::new(mirror), view.clone());
        (uc, view)
    }

    #[tokio::test]
    async fn success_overwrites_mirror_and_view() {
        let fetched = vec![todo("2"), todo("1")];
        let mut remote = MockRemote::new();
        let rows = fetched.clone();
        remote.expect_list_todos().returning(move || Ok(rows.clone()));
        let mut mirror = MockMirror::new();
        let expected = fetched.clone();
        mirror
            .expect_put_all()
            .withf(move |todos| todos == expected.as_slice())
            .times(1)
            .returning(|_| Ok(()));
        mirror.expect_prune_except().times(0);

        let (uc, view) = use_case(remote, mirror);
        view.set_error("old failure");

        let outcome = uc.execute().await.unwrap();

        assert_eq!(outcome.source, TodoSource::Remote);
        let state = view.snapshot();
        assert_eq!(state.todos, fetched);
        assert!(state.error.is_none());
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn remote_failure_serves_entire_mirror_with_error() {
        let cached = vec![todo("A"), todo("B")];
        let mut remote = MockRemote::new();
        remote
            .expect_list_todos()
            .returning(|| Err(RemoteStoreError::Network("connection refused".into())));
        let mut mirror = MockMirror::new();
        let rows = cached.clone();
        mirror.expect_get_all().returning(move || Ok(rows.clone()));
        mirror.expect_put_all().times(0);

        let (uc, view) = use_case(remote, mirror);

        let outcome = uc.execute().await.unwrap();

        assert!(outcome.is_stale());
        let state = view.snapshot();
        assert_eq!(state.todos, cached);
        assert_eq!(
            state.error.as_deref(),
            Some("network error: connection refused")
        );
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn both_sources_failing_keeps_previous_list() {
        let mut remote = MockRemote::new();
        remote
            .expect_list_todos()
            .returning(|| Err(RemoteStoreError::Network("down".into())));
        let mut mirror = MockMirror::new();
        mirror
            .expect_get_all()
            .returning(|| Err(MirrorError::Storage("disk gone".into())));

        let (uc, view) = use_case(remote, mirror);
        view.modify(|s| s.replace_all(vec![todo("keep")]));

        let err = uc.execute().await.unwrap_err();

        assert!(matches!(err, SyncError::Offline { .. }));
        let state = view.snapshot();
        assert_eq!(state.todos.len(), 1);
        assert!(state.error.unwrap().contains("disk gone"));
    }

    #[tokio::test]
    async fn mirror_write_failure_does_not_fail_the_list() {
        let mut remote = MockRemote::new();
        remote.expect_list_todos().returning(|| Ok(vec![todo("1")]));
        let mut mirror = MockMirror::new();
        mirror
            .expect_put_all()
            .returning(|_| Err(MirrorError::Storage("read-only".into())));

        let (uc, view) = use_case(remote, mirror);

        let outcome = uc.execute().await.unwrap();

        assert_eq!(outcome.todos.len(), 1);
        assert!(view.snapshot().error.is_none());
    }

    #[tokio::test]
    async fn pruning_keeps_only_fetched_ids() {
        let mut remote = MockRemote::new();
        remote
            .expect_list_todos()
            .returning(|| Ok(vec![todo("1"), todo("2")]));
        let mut mirror = MockMirror::new();
        mirror.expect_put_all().returning(|_| Ok(()));
        mirror
            .expect_prune_except()
            .withf(|keep| keep == [TodoId::from("1"), TodoId::from("2")])
            .times(1)
            .returning(|_| Ok(3));

        let view = Arc::new(ViewStateStore::new());
        let uc = ListTodos::from_ports(Arc::new(remote), Arc::new(mirror), view).with_pruning(true);

        uc.execute().await.unwrap();
    }
}
