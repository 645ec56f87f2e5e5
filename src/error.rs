//! Error types for the todo store.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Failures that end an invocation. An out-of-range index is not one of
/// these; handlers report it on stdout and carry on.
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading, creating or writing the store failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store exists but is not an array of `{description, status}` records.
    #[error(
        "{} is not a valid todo file (expected an array of {{\"description\", \"status\"}} records): {source}",
        .path.display()
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize todos: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing command output failed, e.g. a closed stdout pipe.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
