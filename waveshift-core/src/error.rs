//! Error types for waveshift-core.
//!
//! All fallible operations in this crate return [`CoreResult`]. Per-file
//! engine failures are recorded by the driver and do not abort a run;
//! configuration errors (format collision, missing ffmpeg) are fatal.

use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for waveshift
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {tool}: {message}")]
    CommandStart { tool: String, message: String },

    #[error("{tool} failed ({status}): {message}")]
    CommandFailed {
        tool: String,
        status: ExitStatus,
        message: String,
    },

    #[error("Failed to wait for {tool}: {message}")]
    CommandWait { tool: String, message: String },

    #[error("Output format '{format}' matches the input format of '{filename}'")]
    FormatCollision { filename: String, format: String },

    #[error("No processable audio files found")]
    NoFilesFound,

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported bitrate: {0}")]
    UnsupportedBitrate(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for waveshift operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for the given tool.
pub fn command_start_error(tool: &str, err: impl std::fmt::Display) -> CoreError {
    CoreError::CommandStart {
        tool: tool.to_string(),
        message: err.to_string(),
    }
}

/// Builds a `CommandFailed` error carrying the exit status and stderr excerpt.
pub fn command_failed_error(
    tool: &str,
    status: ExitStatus,
    message: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        tool: tool.to_string(),
        status,
        message: message.into(),
    }
}

/// Builds a `CommandWait` error for the given tool.
pub fn command_wait_error(tool: &str, err: impl std::fmt::Display) -> CoreError {
    CoreError::CommandWait {
        tool: tool.to_string(),
        message: err.to_string(),
    }
}
