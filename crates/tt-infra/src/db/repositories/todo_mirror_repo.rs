use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;
use tt_core::ids::TodoId;
use tt_core::ports::{ClockPort, MirrorError, TodoMirrorPort};
use tt_core::todo::Todo;

use crate::db::models::{TodoRow, TombstoneRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::{t_todo_mirror, t_todo_tombstone};

/// SQLite-backed local mirror.
pub struct DieselTodoMirrorRepository<E, M> {
    executor: E,
    mapper: M,
    clock: Arc<dyn ClockPort>,
}

impl<E, M> DieselTodoMirrorRepository<E, M> {
    pub fn new(executor: E, mapper: M, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            executor,
            mapper,
            clock,
        }
    }
}

fn storage(e: anyhow::Error) -> MirrorError {
    MirrorError::Storage(format!("{:#}", e))
}

fn corrupt(e: anyhow::Error) -> MirrorError {
    MirrorError::Corrupt(format!("{:#}", e))
}

fn upsert(conn: &mut SqliteConnection, row: &TodoRow) -> QueryResult<usize> {
    diesel::insert_into(t_todo_mirror::table)
        .values(row)
        .on_conflict(t_todo_mirror::id)
        .do_update()
        .set(row)
        .execute(conn)
}

impl<E, M> DieselTodoMirrorRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<Todo, TodoRow> + RowMapper<TodoRow, Todo>,
{
    fn to_rows(&self, todos: &[Todo]) -> Result<Vec<TodoRow>, MirrorError> {
        todos
            .iter()
            .map(|t| self.mapper.to_row(t))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(corrupt)
    }
}

#[async_trait]
impl<E, M> TodoMirrorPort for DieselTodoMirrorRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<Todo, TodoRow> + RowMapper<TodoRow, Todo>,
{
    async fn put_all(&self, todos: &[Todo]) -> Result<(), MirrorError> {
        let rows = self.to_rows(todos)?;

        let written = self
            .executor
            .run(|conn| {
                conn.transaction(|conn| {
                    let tombstoned: Vec<String> = t_todo_tombstone::table
                        .select(t_todo_tombstone::id)
                        .load(conn)?;

                    let mut written = 0;
                    for row in rows.iter().filter(|r| !tombstoned.contains(&r.id)) {
                        written += upsert(conn, row)?;
                    }
                    Ok::<_, diesel::result::Error>(written)
                })
                .map_err(anyhow::Error::from)
            })
            .map_err(storage)?;

        debug!(received = todos.len(), written, "Mirrored todo batch");
        Ok(())
    }

    async fn get(&self, id: &TodoId) -> Result<Option<Todo>, MirrorError> {
        let key = id.as_str();
        let row = self
            .executor
            .run(|conn| {
                t_todo_mirror::table
                    .filter(t_todo_mirror::id.eq(key))
                    .select(TodoRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(anyhow::Error::from)
            })
            .map_err(storage)?;

        row.map(|r| self.mapper.to_domain(&r))
            .transpose()
            .map_err(corrupt)
    }

    /// Single writes come from a confirmed remote create or update, so the
    /// row exists remotely and any tombstone for its id is stale.
    async fn put(&self, todo: &Todo) -> Result<(), MirrorError> {
        let row = self.mapper.to_row(todo).map_err(corrupt)?;

        self.executor
            .run(|conn| {
                conn.transaction(|conn| {
                    diesel::delete(
                        t_todo_tombstone::table.filter(t_todo_tombstone::id.eq(&row.id)),
                    )
                    .execute(conn)?;
                    upsert(conn, &row)
                })
                .map_err(anyhow::Error::from)
            })
            .map_err(storage)?;
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<(), MirrorError> {
        let tombstone = TombstoneRow {
            id: id.as_str().to_string(),
            deleted_at: self.clock.now_ms(),
        };

        self.executor
            .run(|conn| {
                conn.transaction(|conn| {
                    diesel::delete(t_todo_mirror::table.filter(t_todo_mirror::id.eq(&tombstone.id)))
                        .execute(conn)?;
                    diesel::replace_into(t_todo_tombstone::table)
                        .values(&tombstone)
                        .execute(conn)?;
                    Ok::<_, diesel::result::Error>(())
                })
                .map_err(anyhow::Error::from)
            })
            .map_err(storage)
    }

    async fn get_all(&self) -> Result<Vec<Todo>, MirrorError> {
        let rows = self
            .executor
            .run(|conn| {
                t_todo_mirror::table
                    .filter(
                        t_todo_mirror::id
                            .ne_all(t_todo_tombstone::table.select(t_todo_tombstone::id)),
                    )
                    .order(t_todo_mirror::created_at.desc())
                    .select(TodoRow::as_select())
                    .load(conn)
                    .map_err(anyhow::Error::from)
            })
            .map_err(storage)?;

        rows.iter()
            .map(|r| self.mapper.to_domain(r))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(corrupt)
    }

    async fn prune_except(&self, keep: &[TodoId]) -> Result<usize, MirrorError> {
        let keep: Vec<&str> = keep.iter().map(|id| id.as_str()).collect();

        self.executor
            .run(|conn| {
                diesel::delete(t_todo_mirror::table.filter(t_todo_mirror::id.ne_all(&keep)))
                    .execute(conn)
                    .map_err(anyhow::Error::from)
            })
            .map_err(storage)
    }
}
