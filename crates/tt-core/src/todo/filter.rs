use std::str::FromStr;

use super::model::Todo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(format!("unknown status filter: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => todo.category == *name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == "all" {
            Self::All
        } else {
            Self::Named(s.to_string())
        }
    }
}

/// Status and category filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub status: StatusFilter,
    pub category: CategoryFilter,
}

impl TodoFilter {
    pub fn new(status: StatusFilter, category: CategoryFilter) -> Self {
        Self { status, category }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.status.matches(todo) && self.category.matches(todo)
    }

    pub fn apply(&self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Distinct categories in first-seen order.
pub fn categories(todos: &[Todo]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for todo in todos {
        if !seen.iter().any(|c| *c == todo.category) {
            seen.push(todo.category.clone());
        }
    }
    seen
}
