//! # tt-core
//!
//! Core domain models and ports for TaskTrack.
//!
//! This crate contains pure business types without any infrastructure
//! dependencies: the todo model and its change-sets, the filtered views the
//! list screen derives, and the port traits the synchronization layer is
//! written against.

pub mod config;
pub mod ids;
pub mod ports;
pub mod todo;

pub use config::AppConfig;
pub use ids::{OwnerId, TodoId};
pub use todo::{NewTodo, Priority, Todo, TodoFilter, TodoPatch};
