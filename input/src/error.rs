//! Load errors for sequence input

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a sequence could not be loaded
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io { path: PathBuf, source: io::Error },
    /// A token is not a valid `i32` (position is 1-based)
    InvalidToken { token: String, position: usize },
    /// No numbers were found
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            LoadError::InvalidToken { token, position } => {
                write!(f, "token {} ('{}') is not a valid integer", position, token)
            }
            LoadError::Empty => f.write_str("the input is empty or contains no numbers"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
