//! Synchronization use cases.
//!
//! Each use case is one remote round trip followed by local reconciliation:
//!
//! ```text
//! remote store ──ok──→ local mirror ──→ view state (error cleared)
//!      │
//!      └──err──→ view state error (list only: serve local mirror)
//! ```
//!
//! No use case retries. Mirror writes after a successful remote call are
//! best effort: the remote row is authoritative, so a failed mirror write
//! is logged and the operation still succeeds.

mod create_todo;
mod delete_todo;
mod list_todos;
mod update_todo;

pub use create_todo::CreateTodo;
pub use delete_todo::DeleteTodo;
pub use list_todos::{ListOutcome, ListTodos, TodoSource};
pub use update_todo::UpdateTodo;

#[cfg(test)]
pub(crate) mod test_support;
