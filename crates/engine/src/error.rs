//! crates/engine/src/error.rs
//!
//! Error types for build and stream runs.

use crate::summary::Summary;
use crate::transform::TransformError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walk::{WalkError, WalkOperation};

/// Result type for formatter operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur while rewriting files or streams.
///
/// Every message carries the `fmt:` prefix.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The configuration names no search directory.
    #[error("fmt: no search directories configured")]
    NoSearchDirectories,
    /// A search directory does not exist or cannot be inspected.
    #[error("fmt: search directory '{}' is not accessible: {source}", .path.display())]
    MissingRoot {
        /// The configured search directory.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Directory traversal failed.
    #[error("fmt: {0}")]
    Walk(#[from] WalkError),
    /// A source file could not be read.
    #[error("fmt: failed to read '{}': {source}", .path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// The transformer rejected a file's content.
    #[error("fmt: failed to transform '{}': {source}", .path.display())]
    Transform {
        /// File being transformed; empty in stream mode.
        path: PathBuf,
        /// Error returned by the transformer.
        #[source]
        source: TransformError,
    },
    /// Persisting rewritten content failed.
    #[error("fmt: failed to {action} '{}': {source}", .path.display())]
    Persist {
        /// Step of the replacement that failed.
        action: &'static str,
        /// Path the step operated on.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Reading or writing a stream failed.
    #[error("fmt: failed to {action}: {source}")]
    Stream {
        /// Stream operation that failed.
        action: &'static str,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The walk completed under [`ErrorPolicy::Continue`](crate::ErrorPolicy)
    /// but some files failed.
    #[error(
        "fmt: {} of {} files could not be rewritten",
        .summary.failures().len(),
        .summary.visited()
    )]
    Incomplete {
        /// Counters and per-file failures of the run.
        summary: Box<Summary>,
    },
}

/// Broad classification of [`FormatError`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid configuration, detected before any traversal.
    Configuration,
    /// Directory enumeration or file reads failed.
    Traversal,
    /// The transformer failed.
    Transformation,
    /// Writing rewritten content failed.
    Persistence,
    /// Stream mode I/O failed.
    Stream,
    /// Some files failed under the continue policy.
    Partial,
}

impl FormatError {
    pub(crate) fn persist(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Persist {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the category of the failure.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::NoSearchDirectories | Self::MissingRoot { .. } => ErrorCategory::Configuration,
            Self::Walk(error) if matches!(error.operation(), WalkOperation::InspectRoot) => {
                ErrorCategory::Configuration
            }
            Self::Walk(_) => ErrorCategory::Traversal,
            Self::Read { .. } => ErrorCategory::Traversal,
            Self::Transform { .. } => ErrorCategory::Transformation,
            Self::Persist { .. } => ErrorCategory::Persistence,
            Self::Stream { .. } => ErrorCategory::Stream,
            Self::Incomplete { .. } => ErrorCategory::Partial,
        }
    }

    /// Returns the path the failure relates to, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::MissingRoot { path, .. }
            | Self::Read { path, .. }
            | Self::Transform { path, .. }
            | Self::Persist { path, .. } => Some(path),
            Self::Walk(error) => Some(error.path()),
            Self::NoSearchDirectories | Self::Stream { .. } | Self::Incomplete { .. } => None,
        }
    }

    /// Returns the run summary carried by [`FormatError::Incomplete`].
    #[must_use]
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            Self::Incomplete { summary } => Some(summary.as_ref()),
            _ => None,
        }
    }
}
