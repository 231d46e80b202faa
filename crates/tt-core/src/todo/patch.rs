use chrono::{DateTime, Utc};
use serde::Serialize;

use super::model::{Priority, Todo, TodoValidationError};

/// Partial change-set applied by identifier.
///
/// Only fields that are `Some` are sent to the store and overlaid locally.
/// The nullable columns use `Option<Option<_>>` so a patch can clear them:
/// `Some(None)` serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// The patch the list view sends when a checkbox is clicked.
    pub fn toggle_completed(todo: &Todo) -> Self {
        Self {
            completed: Some(!todo.completed),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.completed.is_none()
    }

    /// A set title or category must not be blank, same as on create.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(TodoValidationError::EmptyTitle);
        }
        if self.category.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(TodoValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// Overlays every set field onto `todo`. `id`, `owner` and `created_at`
    /// are never touched.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = description.clone();
        }
        if let Some(due_date) = self.due_date {
            todo.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
        if let Some(category) = &self.category {
            todo.category = category.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }

    pub fn applied(&self, todo: &Todo) -> Todo {
        let mut merged = todo.clone();
        self.apply_to(&mut merged);
        merged
    }
}
