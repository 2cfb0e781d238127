use std::fs;
use std::path::{Path, PathBuf};

/// A file, directory or other node reached by the walk.
#[derive(Debug)]
pub struct WalkEntry {
    pub(crate) path: PathBuf,
    pub(crate) metadata: fs::Metadata,
}

impl WalkEntry {
    /// The root as configured, joined with the names leading to this entry.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` for directories. A symbolic link to a directory is not one:
    /// metadata comes from `symlink_metadata`.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.metadata.file_type().is_dir()
    }

    /// `true` for regular files only.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.metadata.file_type().is_file()
    }
}
