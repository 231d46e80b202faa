//! Session port - who is signed in.
//!
//! Sign-in and sign-up are handled by the identity provider; the data layer
//! only needs the current user id (to stamp new items) and the access token
//! (to authorize table requests).

use async_trait::async_trait;
use tokio::sync::watch;

use super::errors::SessionError;
use crate::ids::OwnerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: OwnerId,
    pub access_token: String,
}

impl Session {
    pub fn new(user_id: impl Into<OwnerId>, access_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
pub trait SessionPort: Send + Sync {
    /// The active session, or `None` when nobody is signed in.
    async fn current_session(&self) -> Result<Option<Session>, SessionError>;

    /// Notifies on every session change (sign-in, sign-out, token refresh).
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}
