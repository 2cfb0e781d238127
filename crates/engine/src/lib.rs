#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` rewrites source trees in place. A [`Formatter`] walks each
//! configured search directory, filters entries through an [`ExclusionSet`],
//! hands every eligible file to a caller-supplied [`Transformer`] and writes
//! the result back only when the bytes changed. Writes go through
//! [`AtomicWriter`], which stages the new content in a sibling temporary file
//! and renames it over the original so an interrupted run never leaves a
//! truncated file.
//!
//! # Design
//!
//! - [`FormatConfig`] lists the search directories, user exclusions and the
//!   knobs that default to the classic Go layout (`.go` sources, `_test.go`
//!   tests, `docs` and `vendor` excluded).
//! - [`ExclusionSet`] matches lexically cleaned paths exactly. Hidden
//!   directories are pruned regardless of the set.
//! - [`needs_write`] compares original and transformed bytes, so a second run
//!   over a formatted tree performs no writes.
//! - [`Formatter::run`] applies the transformer to a single stream.
//!
//! # Errors
//!
//! Every failure is a [`FormatError`] whose message starts with `fmt:`.
//! [`ErrorPolicy::FailFast`] stops at the first failing file; with
//! [`ErrorPolicy::Continue`] per-file failures are collected into the
//! [`Summary`] carried by [`FormatError::Incomplete`].
//!
//! # Examples
//!
//! ```
//! use engine::{FormatConfig, Formatter};
//! use std::fs;
//! use std::path::Path;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("proj");
//! fs::create_dir_all(root.join("vendor"))?;
//! fs::write(root.join("main.go"), "package main  \n")?;
//! fs::write(root.join("vendor/dep.go"), "package dep  \n")?;
//!
//! let trim = |_: &Path, content: &[u8]| -> Result<Vec<u8>, std::io::Error> {
//!     let mut out = content.trim_ascii_end().to_vec();
//!     out.push(b'\n');
//!     Ok(out)
//! };
//! let config = FormatConfig::builder().search_dir(&root).build();
//! let summary = Formatter::new(trim).build(&config)?;
//!
//! assert_eq!(summary.rewritten(), 1);
//! assert_eq!(fs::read_to_string(root.join("main.go"))?, "package main\n");
//! assert_eq!(fs::read_to_string(root.join("vendor/dep.go"))?, "package dep  \n");
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod config;
mod error;
mod exclusion;
mod formatter;
mod gate;
mod paths;
mod stream;
mod summary;
mod transform;
mod writer;

pub use config::{
    DEFAULT_EXCLUDES, DEFAULT_SOURCE_EXTENSION, DEFAULT_TEST_SUFFIX, ErrorPolicy, FormatConfig,
    FormatConfigBuilder, split_list,
};
pub use error::{ErrorCategory, FormatError, FormatResult};
pub use exclusion::ExclusionSet;
pub use formatter::{FileOutcome, Formatter};
pub use gate::needs_write;
pub use paths::clean_path;
pub use summary::{FileFailure, Summary};
pub use transform::{TransformError, Transformer};
pub use writer::AtomicWriter;
