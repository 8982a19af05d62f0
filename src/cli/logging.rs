//! Tracing setup for binaries built on promptio.
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Logs go to stderr so they never interleave with prompts on stdout.
///
/// # Example
/// ```bash
/// RUST_LOG=promptio=debug cargo run --features cli --bin promptio_demo
/// ```
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
