//! Crash-safe replacement of file contents.
//!
//! New content is written to a temporary file in the target's directory, the
//! target's permission bits are copied onto it, and it is renamed over the
//! target. The rename stays on one filesystem, so readers observe either the
//! old file or the new one, never a truncated mix. A guard removes the
//! temporary file on every path that does not end in a successful rename.

use crate::error::FormatError;
use logging::trace_write;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_TEMP_FILE_ID: AtomicUsize = AtomicUsize::new(0);

/// Longest prefix of the target's name, in bytes, embedded in a temporary
/// file name.
const MAX_NAME_PART: usize = 64;

/// Replaces files atomically while preserving their permission bits.
#[derive(Clone, Copy, Debug)]
pub struct AtomicWriter {
    sync: bool,
}

impl Default for AtomicWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicWriter {
    /// Creates a writer that syncs temporary files before renaming them.
    #[must_use]
    pub const fn new() -> Self {
        Self { sync: true }
    }

    /// Controls whether temporary files are synced to stable storage before
    /// the rename. Syncing surfaces deferred write errors before the target is
    /// replaced.
    #[must_use]
    pub const fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Replaces the content of the existing file at `path` with `contents`.
    ///
    /// On failure the target keeps its original content and permissions and
    /// no temporary file is left behind.
    pub fn replace(&self, path: &Path, contents: &[u8]) -> Result<(), FormatError> {
        self.replace_with(path, |file| file.write_all(contents))
    }

    pub(crate) fn replace_with<F>(&self, path: &Path, fill: F) -> Result<(), FormatError>
    where
        F: FnOnce(&mut fs::File) -> io::Result<()>,
    {
        let permissions = fs::metadata(path)
            .map_err(|error| FormatError::persist("inspect permissions", path, error))?
            .permissions();

        let (guard, mut file) = TempFileGuard::create(path)?;
        trace_write!("staging {} in {}", path.display(), guard.path().display());

        fill(&mut file)
            .and_then(|()| file.flush())
            .map_err(|error| FormatError::persist("write temporary file", guard.path(), error))?;
        if self.sync {
            file.sync_all()
                .map_err(|error| FormatError::persist("sync temporary file", guard.path(), error))?;
        }
        drop(file);

        fs::set_permissions(guard.path(), permissions)
            .map_err(|error| FormatError::persist("apply permissions", guard.path(), error))?;

        guard.commit(path)
    }
}

/// Owns a temporary file until it is renamed over its target.
///
/// Dropping an uncommitted guard removes the file.
#[derive(Debug)]
struct TempFileGuard {
    path: PathBuf,
    committed: bool,
}

impl TempFileGuard {
    fn create(destination: &Path) -> Result<(Self, fs::File), FormatError> {
        loop {
            let unique = NEXT_TEMP_FILE_ID.fetch_add(1, Ordering::Relaxed);
            let path = temporary_path(destination, unique);
            let mut options = fs::OpenOptions::new();
            options.write(true).create_new(true);
            // Owner-only until the target's own permissions are applied.
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o600);
            }
            match options.open(&path) {
                Ok(file) => {
                    return Ok((
                        Self {
                            path,
                            committed: false,
                        },
                        file,
                    ));
                }
                Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {}
                Err(error) => {
                    return Err(FormatError::persist("create temporary file", &path, error));
                }
            }
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn commit(mut self, destination: &Path) -> Result<(), FormatError> {
        trace_write!(
            "renaming {} over {}",
            self.path.display(),
            destination.display()
        );
        fs::rename(&self.path, destination)
            .map_err(|error| FormatError::persist("rename temporary file", &self.path, error))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if !self.committed {
            // Best-effort cleanup; the original error is what gets reported.
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Name of the temporary sibling used while replacing `destination`.
///
/// The leading dot keeps the file out of the walk, and the process id plus a
/// per-process counter keep concurrent writers apart. Only the first
/// [`MAX_NAME_PART`] bytes of the target's name are used, so a target whose
/// name is near the filesystem limit still gets a valid sibling.
fn temporary_path(destination: &Path, unique: usize) -> PathBuf {
    let file_name = destination
        .file_name()
        .map_or_else(|| "temp".to_owned(), |name| name.to_string_lossy().into_owned());
    let name_part = truncate_at_char_boundary(&file_name, MAX_NAME_PART);
    destination.with_file_name(format!(".srcfmt-tmp-{name_part}-{}-{unique}", process::id()))
}

fn truncate_at_char_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
