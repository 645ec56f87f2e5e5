use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Result, TodoError};
use crate::todo::TodoList;

/// JSON file holding the whole todo list. Every save rewrites the file in
/// full; there is no locking between concurrent invocations.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored list. A missing file is created holding `[]`,
    /// together with its directory, and an empty list is returned.
    pub fn load(&self) -> Result<TodoList> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.create()?;
                return Ok(TodoList::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let reader = BufReader::new(file);
        let todos: TodoList = serde_json::from_reader(reader).map_err(|source| TodoError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!("loaded {} todos from {}", todos.len(), self.path.display());
        Ok(todos)
    }

    /// Truncates and rewrites the file with the full list.
    pub fn save(&self, todos: &TodoList) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, todos).map_err(TodoError::Serialize)?;
        writer.flush().map_err(|e| self.io_error(e))?;
        debug!("saved {} todos to {}", todos.len(), self.path.display());
        Ok(())
    }

    fn create(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        self.save(&TodoList::new())?;
        info!("created empty todo file at {}", self.path.display());
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> TodoError {
        TodoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
