//! Run configuration for [`Formatter::build`](crate::Formatter::build).

use crate::paths::clean_path;
use std::path::{Path, PathBuf};

/// Subdirectory names excluded below every search directory.
pub const DEFAULT_EXCLUDES: [&str; 2] = ["docs", "vendor"];

/// Extension of the files the formatter rewrites.
pub const DEFAULT_SOURCE_EXTENSION: &str = "go";

/// Suffix marking test files, which are never rewritten.
pub const DEFAULT_TEST_SUFFIX: &str = "_test.go";

/// What a build does when a single file cannot be rewritten.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ErrorPolicy {
    /// Stop at the first failing file.
    #[default]
    FailFast,
    /// Record the failure, keep rewriting the remaining files and report every
    /// failure once the walk completes. Traversal errors still stop the run.
    Continue,
}

/// Configuration consumed by a single build.
///
/// The defaults reproduce the classic behaviour: `.go` files other than
/// `_test.go` files are rewritten, `docs` and `vendor` below each search
/// directory are skipped, and the first failure aborts the run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FormatConfig {
    search_dirs: Vec<PathBuf>,
    excludes: Vec<PathBuf>,
    main_file: Option<PathBuf>,
    default_excludes: Vec<String>,
    source_extension: String,
    test_suffix: String,
    error_policy: ErrorPolicy,
    sync_writes: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            search_dirs: Vec::new(),
            excludes: Vec::new(),
            main_file: None,
            default_excludes: DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_owned(),
            test_suffix: DEFAULT_TEST_SUFFIX.to_owned(),
            error_policy: ErrorPolicy::FailFast,
            sync_writes: true,
        }
    }
}

impl FormatConfig {
    /// Starts a builder populated with the default settings.
    #[must_use]
    pub fn builder() -> FormatConfigBuilder {
        FormatConfigBuilder::default()
    }

    /// Creates a configuration from comma-separated search directories and
    /// exclusions, the form both lists take on a command line.
    ///
    /// ```
    /// use engine::FormatConfig;
    /// use std::path::PathBuf;
    ///
    /// let config = FormatConfig::from_delimited("./, cmd", " internal/gen ,");
    /// assert_eq!(config.search_dirs(), [PathBuf::from("./"), PathBuf::from("cmd")]);
    /// assert_eq!(config.excludes(), [PathBuf::from("internal/gen")]);
    /// ```
    #[must_use]
    pub fn from_delimited(search_dirs: &str, excludes: &str) -> Self {
        Self::builder()
            .search_dirs(search_dirs)
            .excludes(excludes)
            .build()
    }

    /// Directories to walk, in order.
    #[must_use]
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// User-supplied exclusions, already cleaned.
    #[must_use]
    pub fn excludes(&self) -> &[PathBuf] {
        &self.excludes
    }

    /// Legacy main file setting.
    ///
    /// Deprecated: retained so older configurations keep loading. It has no
    /// effect on a build.
    #[must_use]
    pub fn main_file(&self) -> Option<&Path> {
        self.main_file.as_deref()
    }

    /// Subdirectory names excluded below every search directory.
    #[must_use]
    pub fn default_excludes(&self) -> &[String] {
        &self.default_excludes
    }

    /// Extension (without the dot) of eligible files.
    #[must_use]
    pub fn source_extension(&self) -> &str {
        &self.source_extension
    }

    /// Reserved suffix of test files.
    #[must_use]
    pub fn test_suffix(&self) -> &str {
        &self.test_suffix
    }

    /// Policy applied when a file fails to rewrite.
    #[must_use]
    pub const fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Whether temporary files are synced to disk before they replace the
    /// target.
    #[must_use]
    pub const fn sync_writes(&self) -> bool {
        self.sync_writes
    }
}

/// Builder for [`FormatConfig`].
#[derive(Clone, Debug, Default)]
pub struct FormatConfigBuilder {
    config: FormatConfig,
}

impl FormatConfigBuilder {
    /// Appends every directory from a comma-separated list.
    ///
    /// Tokens are trimmed and empty tokens are dropped.
    #[must_use]
    pub fn search_dirs(mut self, list: &str) -> Self {
        self.config
            .search_dirs
            .extend(split_list(list).map(PathBuf::from));
        self
    }

    /// Appends a single search directory.
    #[must_use]
    pub fn search_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.search_dirs.push(dir.into());
        self
    }

    /// Appends every exclusion from a comma-separated list.
    ///
    /// Tokens are trimmed, empty tokens are dropped and the rest are cleaned
    /// lexically.
    #[must_use]
    pub fn excludes(mut self, list: &str) -> Self {
        self.config
            .excludes
            .extend(split_list(list).map(|token| clean_path(Path::new(token))));
        self
    }

    /// Appends a single exclusion.
    #[must_use]
    pub fn exclude<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.excludes.push(clean_path(path.as_ref()));
        self
    }

    /// Sets the deprecated main file. The value is stored but ignored.
    #[must_use]
    pub fn main_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.main_file = Some(path.into());
        self
    }

    /// Replaces the subdirectory names excluded below every search directory.
    #[must_use]
    pub fn default_excludes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.default_excludes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the extension of eligible files. A leading dot is ignored.
    #[must_use]
    pub fn source_extension(mut self, extension: &str) -> Self {
        extension
            .trim_start_matches('.')
            .clone_into(&mut self.config.source_extension);
        self
    }

    /// Sets the reserved test-file suffix.
    #[must_use]
    pub fn test_suffix(mut self, suffix: &str) -> Self {
        suffix.clone_into(&mut self.config.test_suffix);
        self
    }

    /// Sets the policy applied when a file fails to rewrite.
    #[must_use]
    pub const fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.error_policy = policy;
        self
    }

    /// Controls whether temporary files are synced before the rename.
    #[must_use]
    pub const fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> FormatConfig {
        self.config
    }
}

/// Splits a comma-separated list into trimmed, non-empty tokens.
pub fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|token| !token.is_empty())
}
