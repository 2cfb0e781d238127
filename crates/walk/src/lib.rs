#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic filesystem traversal srcfmt uses to find
//! the source files it rewrites. The walker enumerates directories, regular
//! files and other entries below a root, sorting each directory's entries
//! lexicographically so the visit order is stable across platforms and runs.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal options such as whether the root
//!   entry should be emitted.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values in
//!   depth-first pre-order. A directory's contents are produced before the
//!   walker moves on to the directory's next sibling.
//! - [`Walker::skip_current_dir`] prunes the directory that was yielded last.
//!   Directories are only read when the walker is advanced past them, so a
//!   pruned directory is never listed and none of its children are statted.
//! - [`WalkError`] describes the I/O failure that ended a walk. It records
//!   the [`WalkOperation`] that failed and the path it was applied to, so
//!   callers can tell an unusable root apart from a failure deeper down.
//!
//! # Invariants
//!
//! - Entry paths are the root joined with the components below it; the root is
//!   neither canonicalised nor made absolute, so callers see paths spelled the
//!   way they configured them.
//! - Symbolic links are reported as entries but never followed.
//! - The first error ends the traversal; later calls to `next` return `None`.
//! - Traversal never panics.
//!
//! # Examples
//!
//! Walk a small tree while pruning one directory:
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("src");
//! fs::create_dir_all(root.join("keep"))?;
//! fs::create_dir_all(root.join("skip"))?;
//! fs::write(root.join("keep/a.go"), b"package a")?;
//! fs::write(root.join("skip/b.go"), b"package b")?;
//!
//! let mut walker = WalkBuilder::new(&root).include_root(false).build()?;
//! let mut seen = Vec::new();
//! while let Some(entry) = walker.next() {
//!     let entry = entry?;
//!     if entry.path().ends_with("skip") {
//!         walker.skip_current_dir();
//!         continue;
//!     }
//!     seen.push(entry.path().strip_prefix(&root)?.to_path_buf());
//! }
//!
//! assert_eq!(
//!     seen,
//!     vec![std::path::PathBuf::from("keep"), std::path::PathBuf::from("keep/a.go")]
//! );
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod walker;

pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkOperation};
pub use walker::Walker;

#[cfg(test)]
mod tests;
