//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation driven by [`VerbosityConfig`].
//!
//! Library crates in the workspace only emit events; binaries and test
//! harnesses call one of the functions below once to install a subscriber.
//! `RUST_LOG`, when set, takes precedence over the verbosity-derived
//! directive.

use super::config::VerbosityConfig;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the filter for `config`, honouring `RUST_LOG` when present.
#[must_use]
pub fn env_filter(config: &VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directive()))
}

/// Install a stderr subscriber filtered by `config`.
///
/// Returns an error when a global subscriber is already installed.
pub fn try_init_tracing(config: &VerbosityConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
}

/// Install a stderr subscriber filtered by `config`, ignoring repeated calls.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{VerbosityConfig, init_tracing};
///
/// init_tracing(&VerbosityConfig::from_verbose_level(2));
/// logging::trace_walk!("walking {}", "src");
/// ```
pub fn init_tracing(config: &VerbosityConfig) {
    let _ = try_init_tracing(config);
}

/// Install a subscriber that combines `config` with an additional layer.
///
/// Useful for routing events into a custom sink (for example a test
/// collector) while keeping the verbosity-derived filter.
pub fn init_tracing_with_layer<L>(config: &VerbosityConfig, layer: L) -> Result<(), TryInitError>
where
    L: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter(config))
        .try_init()
}
