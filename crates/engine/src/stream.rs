//! Single-stream mode: transform one input into one output without touching
//! the filesystem.

use crate::error::FormatError;
use crate::formatter::Formatter;
use crate::transform::Transformer;
use logging::trace_stream;
use std::io::{Read, Write};
use std::path::Path;

impl<T: Transformer> Formatter<T> {
    /// Reads `input` to the end, transforms it and writes the result to
    /// `output`.
    ///
    /// The transformer sees an empty path. The transformed bytes are always
    /// written, even when they equal the input. Nothing is written when
    /// reading or transforming fails.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Stream`] when reading or writing fails and
    /// [`FormatError::Transform`] when the transformer rejects the input.
    pub fn run<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<(), FormatError> {
        let mut content = Vec::new();
        input
            .read_to_end(&mut content)
            .map_err(|source| FormatError::Stream {
                action: "read input",
                source,
            })?;
        trace_stream!("read {} bytes", content.len());

        let transformed = self
            .transformer()
            .transform(Path::new(""), &content)
            .map_err(|source| FormatError::Transform {
                path: Path::new("").to_path_buf(),
                source,
            })?;

        output
            .write_all(&transformed)
            .and_then(|()| output.flush())
            .map_err(|source| FormatError::Stream {
                action: "write output",
                source,
            })?;
        trace_stream!("wrote {} bytes", transformed.len());
        Ok(())
    }
}
