use async_trait::async_trait;
use tokio::sync::watch;
use tt_core::config::AppConfig;
use tt_core::ports::{Session, SessionError, SessionPort};

/// Session fixed at startup from configuration.
///
/// An empty user id means signed out.
pub struct StaticSessionProvider {
    tx: watch::Sender<Option<Session>>,
}

impl StaticSessionProvider {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let session = if user_id.trim().is_empty() {
            None
        } else {
            Some(Session::new(user_id, access_token))
        };
        let (tx, _rx) = watch::channel(session);
        Self { tx }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.session_user_id.clone(),
            config.session_access_token.clone(),
        )
    }
}

#[async_trait]
impl SessionPort for StaticSessionProvider {
    async fn current_session(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.tx.borrow().clone())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}
