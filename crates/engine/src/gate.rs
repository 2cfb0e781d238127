//! Change detection between original and transformed content.

/// Returns `true` when `transformed` differs from `original` and therefore
/// has to be written back.
///
/// Comparison is exact byte equality. Skipping identical content keeps
/// modification times intact and makes repeated runs write nothing.
#[inline]
#[must_use]
pub fn needs_write(original: &[u8], transformed: &[u8]) -> bool {
    original != transformed
}
