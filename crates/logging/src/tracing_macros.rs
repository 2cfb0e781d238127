//! crates/logging/src/tracing_macros.rs
//! Convenience macros for srcfmt-specific tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with the target of each srcfmt subsystem. The targets match
//! [`Subsystem::target`](crate::Subsystem::target).

/// Emit a directory traversal trace.
///
/// # Example
/// ```ignore
/// trace_walk!("walking {}", root.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "srcfmt::walk", $($arg)*);
    };
}

/// Emit an exclusion decision trace.
///
/// # Example
/// ```ignore
/// trace_filter!("pruned directory {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_filter {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "srcfmt::filter", $($arg)*);
    };
}

/// Emit a rewrite trace.
///
/// # Example
/// ```ignore
/// trace_rewrite!("rewrote {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_rewrite {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "srcfmt::rewrite", $($arg)*);
    };
}

/// Emit a persistence trace.
///
/// # Example
/// ```ignore
/// trace_write!("renaming {} over {}", temp.display(), target.display());
/// ```
#[macro_export]
macro_rules! trace_write {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "srcfmt::write", $($arg)*);
    };
}

/// Emit a stream mode trace.
///
/// # Example
/// ```ignore
/// trace_stream!("read {} bytes", count);
/// ```
#[macro_export]
macro_rules! trace_stream {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "srcfmt::stream", $($arg)*);
    };
}

/// Emit a statistics trace.
///
/// # Example
/// ```ignore
/// trace_stats!("rewrote {} of {} files", rewritten, visited);
/// ```
#[macro_export]
macro_rules! trace_stats {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "srcfmt::stats", $($arg)*);
    };
}
