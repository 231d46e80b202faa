use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tt_core::ids::{OwnerId, TodoId};
use tt_core::ports::{RemoteStoreError, RemoteTodoStorePort, SessionPort};
use tt_core::todo::{NewTodo, Todo, TodoPatch};

pub const DEFAULT_TABLE: &str = "todos";

#[derive(Debug, Clone)]
pub struct RestTodoStoreConfig {
    /// Project base URL without trailing slash, e.g. `https://xyz.example.co`
    pub base_url: String,
    /// Public key sent as `apikey` and used as bearer when signed out
    pub anon_key: String,
    pub table: String,
}

/// PostgREST-style table client.
///
/// Row access is authorized with the current session's access token; the
/// server's row-level rules decide what each request may see.
pub struct RestTodoStore {
    client: Client,
    config: RestTodoStoreConfig,
    session: Arc<dyn SessionPort>,
}

/// Insert body: the new row plus its owner.
#[derive(Serialize)]
struct InsertRow<'a> {
    #[serde(flatten)]
    todo: &'a NewTodo,
    user_id: &'a OwnerId,
}

/// Error body returned by the table API.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    msg: Option<String>,
}

impl RestTodoStore {
    pub fn new(client: Client, config: RestTodoStoreConfig, session: Arc<dyn SessionPort>) -> Self {
        Self {
            client,
            config,
            session,
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table
        )
    }

    /// Signed out means the anon key; a failed session lookup is an error,
    /// not an anonymous request.
    async fn authorized(
        &self,
        builder: RequestBuilder,
    ) -> Result<RequestBuilder, RemoteStoreError> {
        let token = match self.session.current_session().await {
            Ok(Some(session)) => session.access_token,
            Ok(None) => self.config.anon_key.clone(),
            Err(e) => return Err(RemoteStoreError::Session(e.to_string())),
        };
        Ok(builder
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, RemoteStoreError> {
        let response = self
            .authorized(builder)
            .await?
            .send()
            .await
            .map_err(|e| RemoteStoreError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(rejected(status, &body))
    }
}

fn rejected(status: StatusCode, body: &str) -> RemoteStoreError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.msg).or(b.error))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    RemoteStoreError::Rejected {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl RemoteTodoStorePort for RestTodoStore {
    async fn list_todos(&self) -> Result<Vec<Todo>, RemoteStoreError> {
        let request = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")]);

        let todos: Vec<Todo> = self
            .send(request)
            .await?
            .json()
            .await
            .map_err(|e| RemoteStoreError::Decode(e.to_string()))?;

        debug!(count = todos.len(), "Fetched todos");
        Ok(todos)
    }

    async fn insert_todo(&self, owner: &OwnerId, todo: &NewTodo) -> Result<Todo, RemoteStoreError> {
        let request = self
            .client
            .post(self.table_url())
            .query(&[("select", "*")])
            .header("Prefer", "return=representation")
            .json(&[InsertRow {
                todo,
                user_id: owner,
            }]);

        let rows: Vec<Todo> = self
            .send(request)
            .await?
            .json()
            .await
            .map_err(|e| RemoteStoreError::Decode(e.to_string()))?;

        let created = rows.into_iter().next().ok_or(RemoteStoreError::NotFound)?;
        debug!(todo_id = %created.id, "Inserted todo");
        Ok(created)
    }

    async fn update_todo(&self, id: &TodoId, patch: &TodoPatch) -> Result<(), RemoteStoreError> {
        let request = self
            .client
            .patch(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .json(patch);

        self.send(request).await?;
        Ok(())
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<(), RemoteStoreError> {
        let request = self
            .client
            .delete(self.table_url())
            .query(&[("id", format!("eq.{}", id))]);

        self.send(request).await?;
        Ok(())
    }
}
