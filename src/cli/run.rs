use std::io::Write;

use anyhow::Context;
use tracing::info;
use tt_app::{TodoSource, TodoSync};
use tt_core::ids::TodoId;
use tt_core::todo::{NewTodo, TodoPatch};

use super::args::{Command, EditArgs, NewTodoArgs};
use super::output::{format_todo, write_todos};

/// Run one command against `sync`, writing user-facing output to `out`.
///
/// Operation errors come back as `Err`; a list served from the local mirror
/// is not an error, only a warning on stderr.
pub async fn execute(sync: &TodoSync, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::List(args) => {
            let outcome = sync.list().await.context("Failed to list todos")?;
            if let TodoSource::Mirror { error } = &outcome.source {
                eprintln!("warning: showing cached data ({error})");
            }
            write_todos(out, &sync.snapshot().filtered(&args.filter()))?;
        }
        Command::Categories => {
            sync.list().await.context("Failed to list todos")?;
            writeln!(out, "all")?;
            for category in sync.snapshot().categories() {
                writeln!(out, "{category}")?;
            }
        }
        Command::Add(args) => {
            let created = sync
                .create(new_todo(args))
                .await
                .context("Failed to create todo")?;
            info!(todo_id = %created.id, "Created todo");
            writeln!(out, "{}", format_todo(&created))?;
        }
        Command::Edit(args) => {
            let id = TodoId::from(args.id.as_str());
            let patch = edit_patch(args);
            if patch.is_empty() {
                writeln!(out, "Nothing to change.")?;
                return Ok(());
            }
            match sync
                .update(&id, &patch)
                .await
                .with_context(|| format!("Failed to update todo {id}"))?
            {
                Some(updated) => writeln!(out, "{}", format_todo(&updated))?,
                None => writeln!(out, "Updated todo {id}.")?,
            }
        }
        Command::Toggle { id } => {
            let id = TodoId::from(id);
            sync.list().await.context("Failed to list todos")?;
            if let Some(toggled) = sync
                .toggle(&id)
                .await
                .with_context(|| format!("Failed to toggle todo {id}"))?
            {
                writeln!(out, "{}", format_todo(&toggled))?;
            }
        }
        Command::Rm { id } => {
            let id = TodoId::from(id);
            sync.delete(&id)
                .await
                .with_context(|| format!("Failed to delete todo {id}"))?;
            writeln!(out, "Deleted todo {id}.")?;
        }
    }
    Ok(())
}

fn new_todo(args: NewTodoArgs) -> NewTodo {
    let mut todo = NewTodo::new(args.title)
        .with_priority(args.priority)
        .with_category(args.category);
    if let Some(description) = args.description {
        todo = todo.with_description(description);
    }
    if let Some(due) = args.due {
        todo = todo.with_due_date(due);
    }
    todo
}

fn edit_patch(args: EditArgs) -> TodoPatch {
    let mut patch = TodoPatch::new();
    if let Some(title) = args.title {
        patch = patch.title(title);
    }
    if args.clear_description {
        patch = patch.description(None);
    } else if let Some(description) = args.description {
        patch = patch.description(Some(description));
    }
    if args.clear_due {
        patch = patch.due_date(None);
    } else if let Some(due) = args.due {
        patch = patch.due_date(Some(due));
    }
    if let Some(priority) = args.priority {
        patch = patch.priority(priority);
    }
    if let Some(category) = args.category {
        patch = patch.category(category);
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn edit_args(argv: &[&str]) -> EditArgs {
        let mut full = vec!["tasktrack", "edit"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Edit(args) => args,
            other => panic!("expected edit, got {other:?}"),
        }
    }

    #[test]
    fn edit_without_flags_is_an_empty_patch() {
        assert!(edit_patch(edit_args(&["7"])).is_empty());
    }

    #[test]
    fn clear_flags_send_explicit_nulls() {
        let patch = edit_patch(edit_args(&["7", "--clear-due", "--clear-description"]));

        assert_eq!(patch.due_date, Some(None));
        assert_eq!(patch.description, Some(None));
    }

    #[test]
    fn new_todo_carries_optional_fields() {
        let cli = Cli::try_parse_from([
            "tasktrack",
            "add",
            "x",
            "--description",
            "d",
            "--priority",
            "low",
        ])
        .unwrap();
        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };

        let todo = new_todo(args);

        assert_eq!(todo.description.as_deref(), Some("d"));
        assert_eq!(todo.priority, tt_core::todo::Priority::Low);
        assert_eq!(todo.category, "personal");
    }
}
