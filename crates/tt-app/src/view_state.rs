//! In-memory state driving the presentation layer.

use std::sync::Arc;
use tokio::sync::watch;
use tt_core::ids::TodoId;
use tt_core::todo::{categories, Todo, TodoFilter, TodoPatch};

/// Current list, loading flag and last error.
///
/// `error` is shared by all operations: each success clears it and each
/// failure overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoViewState {
    pub todos: Vec<Todo>,
    pub is_loading: bool,
    pub error: Option<String>,
    loads_in_flight: usize,
}

impl TodoViewState {
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == *id)
    }

    pub fn filtered(&self, filter: &TodoFilter) -> Vec<Todo> {
        filter.apply(&self.todos)
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.todos)
    }

    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Puts `todo` at the head, dropping any older copy with the same id.
    pub fn prepend(&mut self, todo: Todo) {
        self.todos.retain(|t| t.id != todo.id);
        self.todos.insert(0, todo);
    }

    /// Returns the merged entry, or `None` if `id` is not in the list.
    pub fn merge_patch(&mut self, id: &TodoId, patch: &TodoPatch) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == *id)?;
        patch.apply_to(todo);
        Some(todo.clone())
    }

    pub fn remove(&mut self, id: &TodoId) {
        self.todos.retain(|t| t.id != *id);
    }
}

/// Owner of the [`TodoViewState`]; observers get a `watch` receiver.
pub struct ViewStateStore {
    tx: watch::Sender<TodoViewState>,
}

impl Default for ViewStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(TodoViewState::default());
        Self { tx }
    }

    pub fn snapshot(&self) -> TodoViewState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TodoViewState> {
        self.tx.subscribe()
    }

    /// Applies `f` as one change; observers never see a half-applied update.
    pub fn modify(&self, f: impl FnOnce(&mut TodoViewState)) {
        self.tx.send_modify(f);
    }

    pub fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.tx.send_modify(|state| state.error = Some(message));
    }

    pub fn clear_error(&self) {
        self.tx.send_if_modified(|state| state.error.take().is_some());
    }

    /// Marks a load as in flight until the returned guard is dropped.
    ///
    /// Loads are counted, so overlapping loads keep `is_loading` set until
    /// the last one finishes.
    pub fn begin_loading(self: &Arc<Self>) -> LoadingGuard {
        self.tx.send_modify(|state| {
            state.loads_in_flight += 1;
            state.is_loading = true;
        });
        LoadingGuard {
            store: Arc::clone(self),
        }
    }

    fn end_loading(&self) {
        self.tx.send_modify(|state| {
            state.loads_in_flight = state.loads_in_flight.saturating_sub(1);
            state.is_loading = state.loads_in_flight > 0;
        });
    }
}

pub struct LoadingGuard {
    store: Arc<ViewStateStore>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.store.end_loading();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tt_core::ids::OwnerId;
    use tt_core::todo::NewTodo;

    fn todo(id: &str) -> Todo {
        NewTodo::new(format!("task {id}")).into_todo(TodoId::from(id), OwnerId::from("u1"), Utc::now())
    }

    #[test]
    fn prepend_keeps_a_single_copy_at_head() {
        let mut state = TodoViewState::default();
        state.replace_all(vec![todo("1"), todo("2")]);

        state.prepend(todo("2"));

        let ids: Vec<_> = state.todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn merge_patch_on_missing_id_changes_nothing() {
        let mut state = TodoViewState::default();
        state.replace_all(vec![todo("1")]);
        let before = state.clone();

        let merged = state.merge_patch(&TodoId::from("9"), &TodoPatch::new().completed(true));

        assert!(merged.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn overlapping_loads_keep_flag_until_last_guard_drops() {
        let store = Arc::new(ViewStateStore::new());

        let first = store.begin_loading();
        let second = store.begin_loading();
        drop(first);
        assert!(store.snapshot().is_loading);

        drop(second);
        assert!(!store.snapshot().is_loading);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = ViewStateStore::new();
        let mut rx = store.subscribe();

        store.modify(|s| s.prepend(todo("1")));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().todos.len(), 1);
    }

    #[test]
    fn clear_error_resets_message() {
        let store = ViewStateStore::new();
        store.set_error("boom");
        assert_eq!(store.snapshot().error.as_deref(), Some("boom"));

        store.clear_error();
        assert!(store.snapshot().error.is_none());
    }
}
