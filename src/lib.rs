//! Personal todo list stored as a JSON array, `~/.todo/todos.json` by default.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;
pub mod todo;

pub use cli::{Action, Cli};
pub use error::{Result, TodoError};
pub use storage::Storage;
pub use todo::{Status, Todo, TodoList};
