//! Directory-tree rewriting.

use crate::config::{ErrorPolicy, FormatConfig};
use crate::error::FormatError;
use crate::exclusion::ExclusionSet;
use crate::gate::needs_write;
use crate::summary::{FileFailure, Summary};
use crate::transform::Transformer;
use crate::writer::AtomicWriter;
use logging::{trace_filter, trace_rewrite, trace_stats, trace_walk};
use std::fs;
use std::path::Path;
use walk::WalkBuilder;

/// What happened to a single file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// The transformer changed the content and the file was replaced.
    Rewritten,
    /// The transformer returned identical bytes; the file was not touched.
    Unchanged,
}

/// Applies a [`Transformer`] to every eligible file below a set of search
/// directories, or to a single stream.
#[derive(Clone, Debug, Default)]
pub struct Formatter<T> {
    transformer: T,
}

impl<T: Transformer> Formatter<T> {
    /// Wraps `transformer`.
    pub const fn new(transformer: T) -> Self {
        Self { transformer }
    }

    /// Returns the wrapped transformer.
    pub const fn transformer(&self) -> &T {
        &self.transformer
    }

    /// Walks every search directory in order and rewrites each eligible file
    /// whose transformed content differs from what is on disk.
    ///
    /// Every search directory is checked before the first file is touched, so
    /// a missing directory aborts the run without modifying anything. Under
    /// [`ErrorPolicy::FailFast`] the first failure is returned and files
    /// already rewritten stay rewritten. Under [`ErrorPolicy::Continue`]
    /// per-file failures are collected and reported through
    /// [`FormatError::Incomplete`] after the walk; traversal errors still stop
    /// the run immediately.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::NoSearchDirectories`] or
    /// [`FormatError::MissingRoot`] for an unusable configuration, and
    /// traversal, transform or persistence errors encountered on the way.
    pub fn build(&self, config: &FormatConfig) -> Result<Summary, FormatError> {
        if config.search_dirs().is_empty() {
            return Err(FormatError::NoSearchDirectories);
        }
        for root in config.search_dirs() {
            fs::metadata(root).map_err(|source| FormatError::MissingRoot {
                path: root.clone(),
                source,
            })?;
        }

        let exclusions = ExclusionSet::from_config(config);
        let writer = AtomicWriter::new().sync(config.sync_writes());
        let mut summary = Summary::default();

        for root in config.search_dirs() {
            self.build_root(root, config, &exclusions, &writer, &mut summary)?;
        }

        trace_stats!(
            rewritten = summary.rewritten(),
            unchanged = summary.unchanged(),
            skipped = summary.skipped_files(),
            pruned = summary.pruned_dirs(),
            failed = summary.failures().len(),
            "build finished"
        );

        if summary.is_complete() {
            Ok(summary)
        } else {
            Err(FormatError::Incomplete {
                summary: Box::new(summary),
            })
        }
    }

    fn build_root(
        &self,
        root: &Path,
        config: &FormatConfig,
        exclusions: &ExclusionSet,
        writer: &AtomicWriter,
        summary: &mut Summary,
    ) -> Result<(), FormatError> {
        trace_walk!("searching {}", root.display());
        let mut walker = WalkBuilder::new(root).build()?;

        while let Some(entry) = walker.next() {
            let entry = entry?;
            let path = entry.path();

            if entry.is_dir() {
                if exclusions.should_exclude_dir(path) {
                    trace_filter!("pruned directory {}", path.display());
                    walker.skip_current_dir();
                    summary.record_pruned();
                }
                continue;
            }

            if !entry.is_file() || exclusions.should_exclude_file(path) {
                trace_filter!("skipped {}", path.display());
                summary.record_skipped();
                continue;
            }

            match self.format_with(path, writer) {
                Ok(FileOutcome::Rewritten) => summary.record_rewritten(),
                Ok(FileOutcome::Unchanged) => summary.record_unchanged(),
                Err(error) => match config.error_policy() {
                    ErrorPolicy::FailFast => return Err(error),
                    ErrorPolicy::Continue => {
                        tracing::warn!(target: "srcfmt::rewrite", "{error}");
                        summary.record_failure(FileFailure::new(path, error));
                    }
                },
            }
        }

        Ok(())
    }

    /// Reads, transforms and, when the content changed, atomically replaces
    /// one file. Exclusion rules are not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Read`], [`FormatError::Transform`] or
    /// [`FormatError::Persist`]. The file keeps its original content on
    /// every error.
    pub fn format_file(&self, path: &Path) -> Result<FileOutcome, FormatError> {
        self.format_with(path, &AtomicWriter::new())
    }

    fn format_with(&self, path: &Path, writer: &AtomicWriter) -> Result<FileOutcome, FormatError> {
        let original = fs::read(path).map_err(|source| FormatError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let transformed = self
            .transformer
            .transform(path, &original)
            .map_err(|source| FormatError::Transform {
                path: path.to_path_buf(),
                source,
            })?;

        if !needs_write(&original, &transformed) {
            tracing::debug!(target: "srcfmt::rewrite", "unchanged {}", path.display());
            return Ok(FileOutcome::Unchanged);
        }

        writer.replace(path, &transformed)?;
        trace_rewrite!("rewrote {}", path.display());
        Ok(FileOutcome::Rewritten)
    }
}
