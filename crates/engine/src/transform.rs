//! The pluggable content transformation applied to every eligible file.

use std::error::Error;
use std::path::Path;

/// Error returned by a [`Transformer`].
pub type TransformError = Box<dyn Error + Send + Sync + 'static>;

/// Rewrites the content of one source file.
///
/// Implementations must be pure with respect to their inputs: the same path
/// and content always produce the same output. `path` is empty when the
/// content comes from a stream rather than a file.
pub trait Transformer {
    /// Returns the transformed form of `content`.
    fn transform(&self, path: &Path, content: &[u8]) -> Result<Vec<u8>, TransformError>;
}

impl<F, E> Transformer for F
where
    F: Fn(&Path, &[u8]) -> Result<Vec<u8>, E>,
    E: Into<TransformError>,
{
    fn transform(&self, path: &Path, content: &[u8]) -> Result<Vec<u8>, TransformError> {
        self(path, content).map_err(Into::into)
    }
}
