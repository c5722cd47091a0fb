//! Board loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading board settings, setup or layout
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config source not found: '{}'", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid board settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Setup line {line}: expected 'Room' or 'Space', found '{kind}'")]
    InvalidRoomKind { line: usize, kind: String },

    #[error("Setup line {line}: expected '<Kind>, <Name>, <Initial>'")]
    MissingField { line: usize },

    #[error("Layout is empty")]
    EmptyLayout,

    #[error("Layout row {row} has {found} columns, expected {expected}")]
    ColumnMismatch {
        expected: usize,
        found: usize,
        row: usize,
    },

    #[error("Layout cell {row},{col} is empty")]
    EmptyToken { row: usize, col: usize },

    #[error("Layout cell {row},{col} uses unknown room '{initial}'")]
    UnknownRoom { row: usize, col: usize, initial: char },
}

impl ConfigError {
    /// The source exists but its contents are not a valid board
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ConfigError::InvalidRoomKind { .. }
                | ConfigError::MissingField { .. }
                | ConfigError::EmptyLayout
                | ConfigError::ColumnMismatch { .. }
                | ConfigError::EmptyToken { .. }
                | ConfigError::UnknownRoom { .. }
        )
    }

    /// Map a read failure on `path` to `SourceNotFound` or `Io`
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::SourceNotFound { path }
        } else {
            ConfigError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_mismatch_display() {
        let err = ConfigError::ColumnMismatch {
            expected: 24,
            found: 23,
            row: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("24"));
        assert!(msg.contains("23"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_not_found_is_not_malformed() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ConfigError::from_io(PathBuf::from("data/missing.txt"), io);
        assert!(matches!(err, ConfigError::SourceNotFound { .. }));
        assert!(!err.is_malformed());
        assert!(err.to_string().contains("data/missing.txt"));
    }

    #[test]
    fn test_other_io_kept() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = ConfigError::from_io(PathBuf::from("x"), io);
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
