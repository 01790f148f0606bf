//! Tracing bootstrap for binaries and tests embedding this crate.
//!
//! The library itself only *emits* through the `tracing` macros (validation
//! warnings, skipped dangling endpoints during `update`); installing a
//! subscriber is the embedder's choice. [`init`] wires up the conventional
//! one: a fmt subscriber on stderr, filtered by `RUST_LOG`, with ANSI color
//! only when stderr is a terminal.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the default subscriber: `RUST_LOG`-filtered fmt output on
/// stderr.
///
/// Falls back to the `warn` level when `RUST_LOG` is unset, so validation
/// findings are visible out of the box. Safe to call more than once — a
/// second call leaves the existing subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
