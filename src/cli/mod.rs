//! Command-line surface: argument types and the command runner.

mod args;
mod output;
mod run;

pub use args::{parse_due, Cli, Command, EditArgs, GlobalArgs, ListArgs, NewTodoArgs};
pub use output::{format_todo, write_todos};
pub use run::execute;
