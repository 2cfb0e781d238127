//! Exact-path exclusion rules consulted during traversal.

use crate::config::FormatConfig;
use crate::paths::clean_path;
use rustc_hash::FxHashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Decides which directories are pruned and which files are skipped.
///
/// Membership is an exact match on lexically cleaned paths: excluding
/// `proj/gen` does not exclude `proj/gen/api`, it only stops the walker from
/// descending into `proj/gen`. The set is built once per run and only read
/// afterwards.
#[derive(Clone, Debug)]
pub struct ExclusionSet {
    paths: FxHashSet<PathBuf>,
    source_extension: String,
    test_suffix: String,
}

impl ExclusionSet {
    /// Creates an empty set that only applies the hidden-directory, test-suffix
    /// and extension rules.
    #[must_use]
    pub fn new(source_extension: &str, test_suffix: &str) -> Self {
        Self {
            paths: FxHashSet::default(),
            source_extension: source_extension.trim_start_matches('.').to_owned(),
            test_suffix: test_suffix.to_lowercase(),
        }
    }

    /// Builds the set for a run: every default exclusion joined under every
    /// search directory, followed by the user exclusions.
    #[must_use]
    pub fn from_config(config: &FormatConfig) -> Self {
        let mut set = Self::new(config.source_extension(), config.test_suffix());
        for root in config.search_dirs() {
            for name in config.default_excludes() {
                set.insert(root.join(name));
            }
        }
        for path in config.excludes() {
            set.insert(path);
        }
        set
    }

    /// Adds a path. Returns `false` if the cleaned path was already present.
    pub fn insert<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.paths.insert(clean_path(path.as_ref()))
    }

    /// Returns `true` if the cleaned form of `path` is in the set.
    #[must_use]
    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        self.paths.contains(&clean_path(path.as_ref()))
    }

    /// Number of registered paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` when no paths are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns `true` if the directory at `path` must be pruned.
    ///
    /// Besides set membership, any directory whose name starts with `.` and
    /// is longer than one byte is hidden and pruned. `.` and `..` have no
    /// name and are never treated as hidden.
    #[must_use]
    pub fn should_exclude_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        self.contains(path) || path.file_name().is_some_and(is_hidden)
    }

    /// Returns `true` if the file at `path` must be skipped.
    ///
    /// Besides set membership, test files (case-insensitive suffix match on
    /// the whole path) and files without the source extension are skipped.
    #[must_use]
    pub fn should_exclude_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        self.contains(path) || self.is_test_file(path) || !self.has_source_extension(path)
    }

    fn is_test_file(&self, path: &Path) -> bool {
        !self.test_suffix.is_empty()
            && path
                .to_string_lossy()
                .to_lowercase()
                .ends_with(&self.test_suffix)
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(extension_of)
            .is_some_and(|extension| extension == self.source_extension.as_bytes())
    }
}

/// Bytes after the last `.` of a file name. Unlike [`Path::extension`], a
/// leading dot counts, so `.go` has the extension `go`.
fn extension_of(name: &OsStr) -> Option<&[u8]> {
    let bytes = name.as_encoded_bytes();
    bytes
        .iter()
        .rposition(|&byte| byte == b'.')
        .map(|dot| &bytes[dot + 1..])
}

fn is_hidden(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'.'
}
