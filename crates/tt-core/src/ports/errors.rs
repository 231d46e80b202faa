use thiserror::Error;

/// Failure talking to the hosted table.
///
/// The `Display` text is what ends up in the view's error field, so it is
/// written for people, not for matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteStoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message} (status {status})")]
    Rejected { status: u16, message: String },

    #[error("unexpected response from store: {0}")]
    Decode(String),

    #[error("store returned no row")]
    NotFound,

    /// The session could not be read, so the request was not sent.
    #[error("session unavailable: {0}")]
    Session(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MirrorError {
    #[error("mirror storage error: {0}")]
    Storage(String),

    #[error("mirror data corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session lookup failed: {0}")]
    Lookup(String),
}
