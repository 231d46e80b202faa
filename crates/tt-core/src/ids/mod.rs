//! ID type wrappers for type safety.

mod id_macro;
mod todo;

pub use todo::{OwnerId, TodoId};
