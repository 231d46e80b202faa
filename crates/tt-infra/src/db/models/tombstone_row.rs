use crate::db::schema::t_todo_tombstone;
use diesel::prelude::*;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_todo_tombstone)]
pub struct TombstoneRow {
    pub id: String,
    pub deleted_at: i64,
}
