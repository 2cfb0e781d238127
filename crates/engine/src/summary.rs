//! Counters and failures collected during a build.

use crate::error::FormatError;
use std::path::{Path, PathBuf};

/// Outcome of a build.
///
/// Every regular file the walk reaches is counted exactly once: as
/// rewritten, unchanged, skipped, or failed.
#[derive(Debug, Default)]
pub struct Summary {
    rewritten: usize,
    unchanged: usize,
    skipped_files: usize,
    pruned_dirs: usize,
    failures: Vec<FileFailure>,
}

impl Summary {
    /// Files that passed the exclusion rules and were handed to the
    /// transformer.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.rewritten + self.unchanged + self.failures.len()
    }

    /// Files whose content changed and was written back.
    #[must_use]
    pub const fn rewritten(&self) -> usize {
        self.rewritten
    }

    /// Files the transformer left byte-identical.
    #[must_use]
    pub const fn unchanged(&self) -> usize {
        self.unchanged
    }

    /// Files skipped by the exclusion rules or because they are not regular
    /// files.
    #[must_use]
    pub const fn skipped_files(&self) -> usize {
        self.skipped_files
    }

    /// Directories pruned without being entered.
    #[must_use]
    pub const fn pruned_dirs(&self) -> usize {
        self.pruned_dirs
    }

    /// Files that failed under the continue policy, in walk order.
    #[must_use]
    pub fn failures(&self) -> &[FileFailure] {
        &self.failures
    }

    /// Returns `true` when no file failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) const fn record_rewritten(&mut self) {
        self.rewritten += 1;
    }

    pub(crate) const fn record_unchanged(&mut self) {
        self.unchanged += 1;
    }

    pub(crate) const fn record_skipped(&mut self) {
        self.skipped_files += 1;
    }

    pub(crate) const fn record_pruned(&mut self) {
        self.pruned_dirs += 1;
    }

    pub(crate) fn record_failure(&mut self, failure: FileFailure) {
        self.failures.push(failure);
    }
}

/// A file that could not be rewritten.
#[derive(Debug)]
pub struct FileFailure {
    path: PathBuf,
    error: FormatError,
}

impl FileFailure {
    pub(crate) fn new(path: &Path, error: FormatError) -> Self {
        Self {
            path: path.to_path_buf(),
            error,
        }
    }

    /// File that failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Why it failed.
    #[must_use]
    pub const fn error(&self) -> &FormatError {
        &self.error
    }
}
