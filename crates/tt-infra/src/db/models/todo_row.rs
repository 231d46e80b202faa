use crate::db::schema::t_todo_mirror;
use diesel::prelude::*;

/// Timestamps are RFC 3339 text so rows stay readable with the sqlite CLI.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = t_todo_mirror)]
#[diesel(treat_none_as_null = true)]
pub struct TodoRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: String,
    pub category: String,
    pub completed: bool,
    pub created_at: String,
    pub mirrored_at: i64,
}
