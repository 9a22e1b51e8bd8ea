//! Unified error types for slackpick.
//!
//! This module provides a single [`SlackpickError`] enum that covers every
//! fatal condition of a run: bad command-line usage, unreadable export files,
//! and export files that are not a JSON array.
//!
//! Malformed *records* inside a valid array are never errors; they are
//! normalized with default values instead (see [`crate::parsing::slack`]).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for slackpick operations.
///
/// # Example
///
/// ```rust
/// use slackpick::error::Result;
/// use slackpick::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SlackpickError>;

/// The error type for all slackpick operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SlackpickError {
    /// Wrong command-line arguments.
    ///
    /// Raised before any file is touched.
    #[error("Usage error: {0}")]
    Usage(String),

    /// An export file could not be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    FileAccess {
        /// The file that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An export file is not valid JSON or not a JSON array.
    #[error("Failed to parse Slack export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The file path, if the content came from a file
        path: Option<PathBuf>,
        /// What went wrong
        #[source]
        source: ParseErrorKind,
    },

    /// Writing results failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// The content is not valid JSON.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is something other than an array.
    #[error("expected a JSON array of messages, found {found}")]
    NotAnArray {
        /// JSON type name of the value found instead
        found: &'static str,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SlackpickError {
    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        SlackpickError::Usage(message.into())
    }

    /// Creates a file access error for `path`.
    pub fn file_access(path: impl AsRef<Path>, source: io::Error) -> Self {
        SlackpickError::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error from an invalid JSON document.
    pub fn json_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        SlackpickError::Parse {
            path,
            source: ParseErrorKind::Json(source),
        }
    }

    /// Creates a parse error for a document whose top level is not an array.
    pub fn not_an_array(found: &'static str, path: Option<PathBuf>) -> Self {
        SlackpickError::Parse {
            path,
            source: ParseErrorKind::NotAnArray { found },
        }
    }

    /// Attaches `path` to a parse error produced from in-memory content.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, path: impl AsRef<Path>) -> Self {
        match self {
            SlackpickError::Parse { path: None, source } => SlackpickError::Parse {
                path: Some(path.as_ref().to_path_buf()),
                source,
            },
            other => other,
        }
    }

    /// Returns `true` if this is a usage error.
    pub fn is_usage(&self) -> bool {
        matches!(self, SlackpickError::Usage(_))
    }

    /// Returns `true` if this is a file access error.
    pub fn is_file_access(&self) -> bool {
        matches!(self, SlackpickError::FileAccess { .. })
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, SlackpickError::Parse { .. })
    }

    /// Process exit code for this error: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() { 2 } else { 1 }
    }
}
