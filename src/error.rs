//! Error types for rename-project.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.
//! Only [`RenameError::Usage`] and [`RenameError::RootNotFound`] ever reach
//! `main`; everything else is reported by the step that hit it.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from rename operations.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Wrong command-line usage. Carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    /// The project root is missing or not a directory.
    #[error("Project root not found or not a directory: {0}")]
    RootNotFound(PathBuf),

    /// Relocation target already exists.
    #[error("Destination already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Relocation source does not exist.
    #[error("Source does not exist: {0}")]
    SourceMissing(PathBuf),

    /// External tool could not be spawned (usually not installed).
    #[error("could not start '{tool}': {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool ran but reported failure.
    #[error("'{tool}' failed with {status}")]
    ToolFailed { tool: String, status: ExitStatus },

    /// Rollback failed after commit error.
    #[error("Rollback failed: {0}")]
    RollbackFailed(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rename-project operations.
pub type Result<T> = std::result::Result<T, RenameError>;
