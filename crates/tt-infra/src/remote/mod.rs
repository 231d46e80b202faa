//! Remote Store Client for the hosted `todos` table.

mod rest_store;

pub use rest_store::{RestTodoStore, RestTodoStoreConfig, DEFAULT_TABLE};
