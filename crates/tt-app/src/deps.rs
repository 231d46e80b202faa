//! # Application Dependencies
//!
//! Parameter grouping for [`TodoSync`](crate::TodoSync) construction.
//! Not a builder: no defaults, no hidden logic, every port is required.

use std::sync::Arc;
use tt_core::ports::{RemoteTodoStorePort, SessionPort, TodoMirrorPort};

pub struct AppDeps {
    pub remote: Arc<dyn RemoteTodoStorePort>,
    pub session: Arc<dyn SessionPort>,
    pub mirror: Arc<dyn TodoMirrorPort>,
}

/// Behavior switches read from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Drop mirror entries that a successful full list did not return.
    pub prune_on_full_sync: bool,
}
