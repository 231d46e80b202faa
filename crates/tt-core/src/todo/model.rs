use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ids::{OwnerId, TodoId};

/// Category assigned when the user does not pick one.
pub const DEFAULT_CATEGORY: &str = "personal";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(TodoValidationError::UnknownPriority(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("category must not be empty")]
    EmptyCategory,

    #[error("unknown priority: {0}")]
    UnknownPriority(String),
}

/// A task record as stored remotely.
///
/// Field names on the wire follow the hosted table's columns, so `owner`
/// travels as `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    #[serde(rename = "user_id")]
    pub owner: OwnerId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Creation payload: a [`Todo`] minus the store-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            category: default_category(),
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        if self.category.trim().is_empty() {
            return Err(TodoValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// Builds the full record once the store has assigned its fields.
    pub fn into_todo(self, id: TodoId, owner: OwnerId, created_at: DateTime<Utc>) -> Todo {
        Todo {
            id,
            owner,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            category: self.category,
            completed: self.completed,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_todo_applies_form_defaults() {
        let todo = NewTodo::new("x");

        assert_eq!(todo.priority, Priority::Medium);
        assert_eq!(todo.category, "personal");
        assert!(!todo.completed);
        assert!(todo.description.is_none());
    }

    #[test]
    fn validate_rejects_blank_title() {
        assert_eq!(
            NewTodo::new("   ").validate(),
            Err(TodoValidationError::EmptyTitle)
        );
    }

    #[test]
    fn validate_rejects_empty_category() {
        let todo = NewTodo::new("x").with_category("");
        assert_eq!(todo.validate(), Err(TodoValidationError::EmptyCategory));
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn todo_deserializes_remote_row() {
        let json = r#"{
            "id": 7,
            "user_id": "u1",
            "title": "x",
            "description": null,
            "due_date": "2025-03-01T09:30:00+00:00",
            "priority": "low",
            "category": "personal",
            "completed": false,
            "created_at": "2025-02-01T12:00:00.123456+00:00"
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();

        assert_eq!(todo.id.as_str(), "7");
        assert_eq!(todo.owner.as_str(), "u1");
        assert_eq!(todo.priority, Priority::Low);
        assert_eq!(
            todo.due_date,
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap())
        );
    }

    #[test]
    fn todo_row_missing_optional_columns_uses_defaults() {
        let json = r#"{"id":"a","user_id":"u1","title":"x","created_at":"2025-02-01T12:00:00Z"}"#;

        let todo: Todo = serde_json::from_str(json).unwrap();

        assert_eq!(todo.category, DEFAULT_CATEGORY);
        assert_eq!(todo.priority, Priority::Medium);
        assert!(!todo.completed);
    }
}
