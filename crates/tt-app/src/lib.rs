//! TaskTrack synchronization layer.
//!
//! Every operation acts on the remote store first, then reconciles the local
//! mirror, then updates the in-memory view state. [`TodoSync`] is the single
//! entry point the presentation layer talks to; it serializes operations per
//! item so that concurrent edits of the same todo cannot interleave.

pub mod arbiter;
pub mod deps;
pub mod error;
pub mod sync;
pub mod usecases;
pub mod view_state;

pub use deps::{AppDeps, SyncOptions};
pub use error::SyncError;
pub use sync::TodoSync;
pub use usecases::{ListOutcome, TodoSource};
pub use view_state::{TodoViewState, ViewStateStore};
