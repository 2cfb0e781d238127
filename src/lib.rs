#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `srcfmt` rewrites source files in place through a caller-supplied
//! transformation. Given one or more search directories it finds every
//! eligible file, runs the transformation and writes back only the files
//! whose bytes changed. Each write replaces the file atomically and keeps its
//! permission bits. A stream mode applies the same transformation to an
//! arbitrary reader and writer.
//!
//! This crate re-exports the workspace members:
//!
//! - [`engine`] holds the formatter, configuration, exclusion rules and the
//!   atomic writer.
//! - [`walk`] is the deterministic, prunable directory walker.
//! - [`logging`] maps verbosity settings onto `tracing` targets.
//!
//! # Examples
//!
//! ```
//! use srcfmt::{FormatConfig, Formatter};
//! use std::path::Path;
//!
//! let upper = |_: &Path, content: &[u8]| -> Result<Vec<u8>, std::io::Error> {
//!     Ok(content.to_ascii_uppercase())
//! };
//! let mut out = Vec::new();
//! Formatter::new(upper).run(&b"package main\n"[..], &mut out).unwrap();
//! assert_eq!(out, b"PACKAGE MAIN\n");
//!
//! let config = FormatConfig::from_delimited("./cmd, ./pkg", "pkg/gen");
//! assert_eq!(config.search_dirs().len(), 2);
//! ```

pub use engine;
pub use logging;
pub use walk;

pub use engine::{
    AtomicWriter, DEFAULT_EXCLUDES, DEFAULT_SOURCE_EXTENSION, DEFAULT_TEST_SUFFIX, ErrorCategory,
    ErrorPolicy, ExclusionSet, FileFailure, FileOutcome, FormatConfig, FormatConfigBuilder,
    FormatError, FormatResult, Formatter, Summary, TransformError, Transformer, clean_path,
    needs_write, split_list,
};
pub use logging::{Subsystem, VerbosityConfig, init_tracing, try_init_tracing};
