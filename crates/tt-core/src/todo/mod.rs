//! Todo item domain model.
//!
//! A [`Todo`] is owned by the remote store: the store assigns `id` and
//! `created_at`, stamps nothing else, and is authoritative. Everything in
//! this module is pure data plus the small amount of logic needed to build
//! and overlay change-sets and derive filtered views.

mod filter;
mod model;
mod patch;

pub use filter::{categories, CategoryFilter, StatusFilter, TodoFilter};
pub use model::{NewTodo, Priority, Todo, TodoValidationError, DEFAULT_CATEGORY};
pub use patch::TodoPatch;
