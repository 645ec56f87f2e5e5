//! Where the todo file lives.
//!
//! | Source | Example |
//! |--------|---------|
//! | `--file <PATH>` | `todo --file ./todos.json -l` |
//! | `TODO_FILE` | `TODO_FILE=/tmp/t.json todo -l` |
//! | default | `~/.todo/todos.json` |

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Environment variable that overrides the store location.
pub const TODO_FILE_ENV: &str = "TODO_FILE";

/// Directory under home that holds the store.
const DEFAULT_DIR: &str = ".todo";

const DEFAULT_FILE: &str = "todos.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to determine home directory")]
    NoHomeDirectory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
}

impl Config {
    /// Uses the explicit path when one was given, otherwise the home default.
    pub fn resolve(file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let file = match file {
            Some(path) => path,
            None => {
                let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
                default_file(dirs.home_dir())
            }
        };
        Ok(Self { file })
    }
}

pub fn default_file(home: &Path) -> PathBuf {
    home.join(DEFAULT_DIR).join(DEFAULT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_under_home() {
        let path = default_file(Path::new("/home/alice"));
        assert_eq!(path, PathBuf::from("/home/alice/.todo/todos.json"));
    }

    #[test]
    fn test_explicit_file_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/mine.json"))).unwrap();
        assert_eq!(config.file, PathBuf::from("/tmp/mine.json"));
    }
}
