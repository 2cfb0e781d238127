use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Step of the traversal that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOperation {
    /// Querying the root's metadata while building the walker.
    InspectRoot,
    /// Opening a directory for listing.
    ListDirectory,
    /// Pulling the next name out of an open directory listing.
    ReadEntry,
    /// Querying the metadata of an entry below the root.
    InspectEntry,
}

impl WalkOperation {
    const fn verb(self) -> &'static str {
        match self {
            Self::InspectRoot => "inspect traversal root",
            Self::ListDirectory => "list directory",
            Self::ReadEntry => "read an entry of",
            Self::InspectEntry => "inspect",
        }
    }
}

/// I/O failure that ended a walk, tagged with the operation and the path it
/// was applied to.
#[derive(Debug)]
pub struct WalkError {
    operation: WalkOperation,
    path: PathBuf,
    source: io::Error,
}

impl WalkError {
    pub(crate) const fn new(operation: WalkOperation, path: PathBuf, source: io::Error) -> Self {
        Self {
            operation,
            path,
            source,
        }
    }

    /// What the walker was doing when it failed.
    ///
    /// [`WalkOperation::InspectRoot`] means the root itself is unusable;
    /// every other operation failed below an accessible root.
    #[must_use]
    pub const fn operation(&self) -> WalkOperation {
        self.operation
    }

    /// Path the failing operation was applied to. For
    /// [`WalkOperation::ReadEntry`] this is the directory being listed.
    ///
    /// ```
    /// use walk::{WalkBuilder, WalkOperation};
    ///
    /// let error = WalkBuilder::new("./definitely_missing_root").build().unwrap_err();
    /// assert_eq!(error.operation(), WalkOperation::InspectRoot);
    /// assert!(error.path().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to {} '{}': {}",
            self.operation.verb(),
            self.path.display(),
            self.source
        )
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
