//! Handlers for the four actions. Each one loads the store, applies at most
//! one change, saves when something changed and prints what happened
//! followed by the refreshed list.

use std::io::Write;

use log::warn;

use crate::error::{Result, TodoError};
use crate::storage::Storage;

const INVALID_INDEX: &str = "invalid todo index";

/// Prints every todo as `<n> - <description> - <STATUS>`. Prints nothing
/// for an empty store.
pub fn list<W: Write>(storage: &Storage, out: &mut W) -> Result<()> {
    let todos = storage.load()?;
    for line in todos.lines() {
        writeln!(out, "{line}").map_err(TodoError::Output)?;
    }
    Ok(())
}

pub fn add<W: Write>(storage: &Storage, description: &str, out: &mut W) -> Result<()> {
    let mut todos = storage.load()?;
    todos.add(description);
    storage.save(&todos)?;
    writeln!(out, "added: {description}\n").map_err(TodoError::Output)?;
    list(storage, out)
}

pub fn remove<W: Write>(storage: &Storage, position: i64, out: &mut W) -> Result<()> {
    let mut todos = storage.load()?;
    match todos.remove(position) {
        Some(todo) => {
            storage.save(&todos)?;
            writeln!(out, "removed: {}\n", todo.description).map_err(TodoError::Output)?;
        }
        None => invalid_index(position, todos.len(), out)?,
    }
    list(storage, out)
}

/// Marks the todo completed. Completing an already completed todo still
/// saves and reports.
pub fn complete<W: Write>(storage: &Storage, position: i64, out: &mut W) -> Result<()> {
    let mut todos = storage.load()?;
    match todos.complete(position).map(|todo| todo.description.clone()) {
        Some(description) => {
            storage.save(&todos)?;
            writeln!(out, "completed: {description}\n").map_err(TodoError::Output)?;
        }
        None => invalid_index(position, todos.len(), out)?,
    }
    list(storage, out)
}

fn invalid_index<W: Write>(position: i64, len: usize, out: &mut W) -> Result<()> {
    warn!("rejected todo index {position}, store holds {len}");
    writeln!(out, "{INVALID_INDEX}\n").map_err(TodoError::Output)?;
    Ok(())
}
