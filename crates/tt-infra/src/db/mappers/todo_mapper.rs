use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use tt_core::ids::{OwnerId, TodoId};
use tt_core::ports::ClockPort;
use tt_core::todo::{Priority, Todo};

use crate::db::models::TodoRow;
use crate::db::ports::{InsertMapper, RowMapper};

/// Maps [`Todo`] ⇄ [`TodoRow`], stamping `mirrored_at` on the way in.
pub struct TodoRowMapper {
    clock: Arc<dyn ClockPort>,
}

impl TodoRowMapper {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }
}

fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_ts(raw: &str, column: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .with_context(|| format!("invalid {} timestamp: {}", column, raw))
}

impl InsertMapper<Todo, TodoRow> for TodoRowMapper {
    fn to_row(&self, domain: &Todo) -> Result<TodoRow> {
        Ok(TodoRow {
            id: domain.id.as_str().to_string(),
            user_id: domain.owner.as_str().to_string(),
            title: domain.title.clone(),
            description: domain.description.clone(),
            due_date: domain.due_date.as_ref().map(format_ts),
            priority: domain.priority.as_str().to_string(),
            category: domain.category.clone(),
            completed: domain.completed,
            created_at: format_ts(&domain.created_at),
            mirrored_at: self.clock.now_ms(),
        })
    }
}

impl RowMapper<TodoRow, Todo> for TodoRowMapper {
    fn to_domain(&self, row: &TodoRow) -> Result<Todo> {
        let priority: Priority = row
            .priority
            .parse()
            .with_context(|| format!("row {}", row.id))?;

        Ok(Todo {
            id: TodoId::from(row.id.as_str()),
            owner: OwnerId::from(row.user_id.as_str()),
            title: row.title.clone(),
            description: row.description.clone(),
            due_date: row
                .due_date
                .as_deref()
                .map(|raw| parse_ts(raw, "due_date"))
                .transpose()?,
            priority,
            category: row.category.clone(),
            completed: row.completed,
            created_at: parse_ts(&row.created_at, "created_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tt_core::todo::NewTodo;

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    fn mapper() -> TodoRowMapper {
        TodoRowMapper::new(Arc::new(FixedClock(1_700_000_000_000)))
    }

    #[test]
    fn row_keeps_every_field() {
        let todo = NewTodo::new("x")
            .with_description("d")
            .with_due_date(Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap())
            .into_todo(
                TodoId::from("7"),
                OwnerId::from("u1"),
                Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap(),
            );

        let row = mapper().to_row(&todo).unwrap();

        assert_eq!(row.mirrored_at, 1_700_000_000_000);
        assert_eq!(row.created_at, "2025-02-01T12:00:00.000000Z");
        assert_eq!(mapper().to_domain(&row).unwrap(), todo);
    }

    #[test]
    fn unknown_priority_is_an_error() {
        let mut row = mapper()
            .to_row(&NewTodo::new("x").into_todo(TodoId::from("1"), OwnerId::from("u1"), Utc::now()))
            .unwrap();
        row.priority = "urgent".into();

        let err = mapper().to_domain(&row).unwrap_err();

        assert!(format!("{:#}", err).contains("urgent"));
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let mut row = mapper()
            .to_row(&NewTodo::new("x").into_todo(TodoId::from("1"), OwnerId::from("u1"), Utc::now()))
            .unwrap();
        row.created_at = "yesterday".into();

        assert!(mapper().to_domain(&row).is_err());
    }
}
