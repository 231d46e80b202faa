//! Port mocks shared by the use case tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use tokio::sync::watch;
use tt_core::ids::{OwnerId, TodoId};
use tt_core::ports::{
    MirrorError, RemoteStoreError, RemoteTodoStorePort, Session, SessionError, SessionPort,
    TodoMirrorPort,
};
use tt_core::todo::{NewTodo, Todo, TodoPatch};

mock! {
    pub Remote {}

    #[async_trait]
    impl RemoteTodoStorePort for Remote {
        async fn list_todos(&self) -> Result<Vec<Todo>, RemoteStoreError>;
        async fn insert_todo(&self, owner: &OwnerId, todo: &NewTodo) -> Result<Todo, RemoteStoreError>;
        async fn update_todo(&self, id: &TodoId, patch: &TodoPatch) -> Result<(), RemoteStoreError>;
        async fn delete_todo(&self, id: &TodoId) -> Result<(), RemoteStoreError>;
    }
}

mock! {
    pub Mirror {}

    #[async_trait]
    impl TodoMirrorPort for Mirror {
        async fn put_all(&self, todos: &[Todo]) -> Result<(), MirrorError>;
        async fn get(&self, id: &TodoId) -> Result<Option<Todo>, MirrorError>;
        async fn put(&self, todo: &Todo) -> Result<(), MirrorError>;
        async fn delete(&self, id: &TodoId) -> Result<(), MirrorError>;
        async fn get_all(&self) -> Result<Vec<Todo>, MirrorError>;
        async fn prune_except(&self, keep: &[TodoId]) -> Result<usize, MirrorError>;
    }
}

mock! {
    pub SessionProvider {}

    #[async_trait]
    impl SessionPort for SessionProvider {
        async fn current_session(&self) -> Result<Option<Session>, SessionError>;
        fn subscribe(&self) -> watch::Receiver<Option<Session>>;
    }
}

pub fn todo(id: &str) -> Todo {
    NewTodo::new(format!("task {id}")).into_todo(
        TodoId::from(id),
        OwnerId::from("u1"),
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    )
}
