use crate::entry::WalkEntry;
use crate::error::{WalkError, WalkOperation};
use logging::trace_walk;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// Depth-first iterator over filesystem entries.
///
/// Directories are listed lazily: the walker reads a directory only when it
/// is advanced past the entry that named it. Calling
/// [`skip_current_dir`](Self::skip_current_dir) in between prunes the
/// directory without touching it.
#[derive(Debug)]
pub struct Walker {
    root_entry: Option<WalkEntry>,
    pending: Option<PathBuf>,
    stack: Vec<Listing>,
    finished: bool,
}

impl Walker {
    pub(crate) fn new(root: PathBuf, include_root: bool) -> Result<Self, WalkError> {
        trace_walk!("walking {}", root.display());

        let metadata = fs::symlink_metadata(&root)
            .map_err(|error| WalkError::new(WalkOperation::InspectRoot, root.clone(), error))?;

        let mut walker = Self {
            root_entry: None,
            pending: None,
            stack: Vec::new(),
            finished: false,
        };

        if include_root {
            walker.root_entry = Some(WalkEntry {
                path: root,
                metadata,
            });
        } else if metadata.file_type().is_dir() {
            walker.descend(root)?;
        }

        Ok(walker)
    }

    /// Prunes the directory returned by the most recent call to `next`.
    ///
    /// The directory is never read and none of its descendants are yielded.
    /// Traversal continues with the directory's next sibling. Has no effect
    /// when the most recent entry was not a directory.
    pub fn skip_current_dir(&mut self) {
        if let Some(dir) = self.pending.take() {
            trace_walk!("pruning {}", dir.display());
        }
    }

    fn descend(&mut self, dir: PathBuf) -> Result<(), WalkError> {
        trace_walk!("entering directory: {}", dir.display());
        self.stack.push(Listing::read(dir)?);
        Ok(())
    }

    fn yield_entry(&mut self, entry: WalkEntry) -> Option<Result<WalkEntry, WalkError>> {
        if entry.is_dir() {
            self.pending = Some(entry.path.clone());
        }
        Some(Ok(entry))
    }

    fn fail(&mut self, error: WalkError) -> Option<Result<WalkEntry, WalkError>> {
        self.finished = true;
        Some(Err(error))
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(root) = self.root_entry.take() {
            return self.yield_entry(root);
        }

        if let Some(dir) = self.pending.take()
            && let Err(error) = self.descend(dir)
        {
            return self.fail(error);
        }

        loop {
            let listing = self.stack.last_mut()?;
            let Some(name) = listing.next_name() else {
                self.stack.pop();
                continue;
            };
            let path = listing.dir.join(name);

            return match fs::symlink_metadata(&path) {
                Ok(metadata) => self.yield_entry(WalkEntry { path, metadata }),
                Err(error) => self.fail(WalkError::new(WalkOperation::InspectEntry, path, error)),
            };
        }
    }
}

/// Sorted names of one directory, consumed front to back.
#[derive(Debug)]
struct Listing {
    dir: PathBuf,
    names: std::vec::IntoIter<OsString>,
}

impl Listing {
    fn read(dir: PathBuf) -> Result<Self, WalkError> {
        let read_dir = fs::read_dir(&dir)
            .map_err(|error| WalkError::new(WalkOperation::ListDirectory, dir.clone(), error))?;
        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry
                .map_err(|error| WalkError::new(WalkOperation::ReadEntry, dir.clone(), error))?;
            names.push(entry.file_name());
        }
        names.sort();

        trace_walk!("found {} entries in {}", names.len(), dir.display());

        Ok(Self {
            dir,
            names: names.into_iter(),
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        self.names.next()
    }
}
