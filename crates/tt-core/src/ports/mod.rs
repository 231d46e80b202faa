//! Port interfaces for the application layer
//!
//! Ports define the contract between the synchronization use cases and the
//! infrastructure that talks to the hosted table, the identity service and
//! the local mirror. Use cases only ever see these traits.

mod clock;
pub mod errors;
pub mod mirror;
pub mod remote_store;
pub mod session;

pub use clock::ClockPort;
pub use errors::{MirrorError, RemoteStoreError, SessionError};
pub use mirror::TodoMirrorPort;
pub use remote_store::RemoteTodoStorePort;
pub use session::{Session, SessionPort};
