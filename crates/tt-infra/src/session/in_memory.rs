use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;
use tt_core::ports::{Session, SessionError, SessionPort};

/// Mutable session holder fed by whatever performs sign-in.
pub struct InMemorySessionStore {
    tx: watch::Sender<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn with_session(session: Session) -> Self {
        let (tx, _rx) = watch::channel(Some(session));
        Self { tx }
    }

    /// Sign-in or token refresh.
    pub fn set_session(&self, session: Session) {
        info!(user_id = %session.user_id, "Session established");
        self.tx.send_replace(Some(session));
    }

    /// Sign-out.
    pub fn clear(&self) {
        if self.tx.send_replace(None).is_some() {
            info!("Session cleared");
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionPort for InMemorySessionStore {
    async fn current_session(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.tx.borrow().clone())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_signed_out() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.current_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn subscribers_observe_sign_in_and_sign_out() {
        let store = InMemorySessionStore::new();
        let mut rx = store.subscribe();

        store.set_session(Session::new("u1", "jwt"));
        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow_and_update().as_ref().map(|s| s.user_id.as_str().to_string()),
            Some("u1".to_string())
        );

        store.clear();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
        assert_eq!(store.current_session().await.unwrap(), None);
    }
}
