use std::io::{self, Write};

use tt_core::todo::Todo;

/// One line per todo: `[x] 7  title  (high, work, due 2025-06-30)`.
pub fn format_todo(todo: &Todo) -> String {
    let mark = if todo.completed { "x" } else { " " };
    let mut meta = vec![todo.priority.to_string(), todo.category.clone()];
    if let Some(due) = todo.due_date {
        meta.push(format!("due {}", due.format("%Y-%m-%d")));
    }

    let mut line = format!("[{mark}] {}  {}  ({})", todo.id, todo.title, meta.join(", "));
    if let Some(description) = todo.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str("\n      ");
        line.push_str(description);
    }
    line
}

pub fn write_todos(out: &mut impl Write, todos: &[Todo]) -> io::Result<()> {
    if todos.is_empty() {
        return writeln!(out, "No todos.");
    }
    for todo in todos {
        writeln!(out, "{}", format_todo(todo))?;
    }
    Ok(())
}
