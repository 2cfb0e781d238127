#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` centralises how the srcfmt workspace reports what it is doing.
//! Every subsystem emits structured [`tracing`] events on its own target
//! (`srcfmt::walk`, `srcfmt::write`, ...) through the macros exported here, and
//! [`VerbosityConfig`] translates a `-v` count or `name<level>` flag tokens into
//! the matching `tracing-subscriber` filter.
//!
//! # Design
//!
//! - [`Subsystem`] names each diagnostic category and owns its target string.
//! - [`VerbosityConfig`] stores one level per subsystem and renders an
//!   [`EnvFilter`](tracing_subscriber::EnvFilter) directive.
//! - [`init_tracing`] and friends install a stderr subscriber. Library code
//!   never calls them.
//!
//! # Examples
//!
//! ```
//! use logging::{Subsystem, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_flag("filter2").unwrap();
//! assert_eq!(config.levels.get(Subsystem::Filter), 2);
//! assert!(config.directive().contains("srcfmt::filter=debug"));
//! ```

mod config;
mod levels;
mod tracing_bridge;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::{Subsystem, SubsystemLevels};
pub use tracing_bridge::{env_filter, init_tracing, init_tracing_with_layer, try_init_tracing};
