//! Error types for Legible operations.
//!
//! This module defines [`LegibleError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LegibleError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LegibleError::Other`) for unexpected errors
//! - Precheck failures are data, not errors: they are carried inside an
//!   [`Evaluation`](crate::eval::Evaluation) and rendered inline, never
//!   returned through `Result`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Legible operations.
#[derive(Debug, Error)]
pub enum LegibleError {
    /// Input file not found at the given path.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Referenced scale id is not in the registry.
    #[error("Unknown scale: {id}")]
    UnknownScale { id: String },

    /// A `--lines` range that cannot be applied to the input.
    #[error("Invalid line range '{range}': {message}")]
    InvalidLineRange { range: String, message: String },

    /// Failed to set up the filesystem watcher.
    #[error("Watch failed for {path}: {message}")]
    WatchError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Legible operations.
pub type Result<T> = std::result::Result<T, LegibleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_displays_path() {
        let err = LegibleError::FileNotFound {
            path: PathBuf::from("/foo/draft.md"),
        };
        assert!(err.to_string().contains("/foo/draft.md"));
    }

    #[test]
    fn unknown_scale_displays_id() {
        let err = LegibleError::UnknownScale {
            id: "nonexistent".into(),
        };
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn invalid_line_range_displays_range_and_message() {
        let err = LegibleError::InvalidLineRange {
            range: "9:3".into(),
            message: "start is after end".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("9:3"));
        assert!(msg.contains("start is after end"));
    }

    #[test]
    fn watch_error_displays_path_and_message() {
        let err = LegibleError::WatchError {
            path: PathBuf::from("/tmp/essay.txt"),
            message: "inotify limit reached".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/essay.txt"));
        assert!(msg.contains("inotify limit reached"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LegibleError = io_err.into();
        assert!(matches!(err, LegibleError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(LegibleError::UnknownScale { id: "test".into() })
        }
        assert!(returns_error().is_err());
    }
}
