use std::io::Write;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::commands;
use crate::config::{Config, TODO_FILE_ENV};
use crate::error::{Result, TodoError};
use crate::storage::Storage;

// Flags rather than subcommands: at most one action runs, picked in the
// order the fields are declared below.
#[derive(Parser, Debug, Default)]
#[command(name = "todo")]
#[command(version, about = "Simple CLI Todo Application")]
#[command(allow_negative_numbers = true, args_override_self = true)]
pub struct Cli {
    /// list all todos
    #[arg(short, long)]
    pub list: bool,

    /// add a new todo
    #[arg(short, long, value_name = "TODO")]
    pub add: Option<String>,

    /// remove a todo
    #[arg(short, long, value_name = "N")]
    pub remove: Option<i64>,

    /// complete a todo
    #[arg(short, long, value_name = "N")]
    pub complete: Option<i64>,

    /// Todo file to use instead of ~/.todo/todos.json
    #[arg(long, value_name = "PATH", env = TODO_FILE_ENV)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Add(String),
    Remove(i64),
    Complete(i64),
    Help,
}

impl Cli {
    /// An index of `0` still counts as supplied; validation rejects it later.
    pub fn action(&self) -> Action {
        if self.list {
            Action::List
        } else if let Some(description) = &self.add {
            Action::Add(description.clone())
        } else if let Some(position) = self.remove {
            Action::Remove(position)
        } else if let Some(position) = self.complete {
            Action::Complete(position)
        } else {
            Action::Help
        }
    }
}

/// Runs the single action selected by `cli`. Help is printed without
/// touching the store.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let action = cli.action();
    if action == Action::Help {
        write!(out, "{}", Cli::command().render_help()).map_err(TodoError::Output)?;
        return Ok(());
    }

    let config = Config::resolve(cli.file)?;
    let storage = Storage::new(config.file);
    log::debug!("running {:?} against {}", action, storage.path().display());

    match action {
        Action::List => commands::list(&storage, out),
        Action::Add(description) => commands::add(&storage, &description, out),
        Action::Remove(position) => commands::remove(&storage, position, out),
        Action::Complete(position) => commands::complete(&storage, position, out),
        Action::Help => Ok(()),
    }
}
