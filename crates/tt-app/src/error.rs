use thiserror::Error;
use tt_core::ids::TodoId;
use tt_core::ports::{MirrorError, RemoteStoreError, SessionError};
use tt_core::todo::TodoValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Nothing was sent: there is no signed-in user to own the item.
    #[error("not signed in")]
    NotAuthenticated,

    #[error("invalid todo: {0}")]
    Invalid(#[from] TodoValidationError),

    #[error("todo {0} is not in the current list")]
    NotInView(TodoId),

    #[error(transparent)]
    Remote(#[from] RemoteStoreError),

    #[error(transparent)]
    Mirror(#[from] MirrorError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// The remote list failed and the local mirror could not be read either.
    #[error("{remote}; local copy unavailable: {mirror}")]
    Offline {
        remote: RemoteStoreError,
        mirror: MirrorError,
    },
}
