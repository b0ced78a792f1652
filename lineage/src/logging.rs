//! Diagnostic tracing for the lineage binaries.
//!
//! Demo text is product output and goes to stdout. Tracing is diagnostics
//! only and always goes to stderr, so enabling it never changes what a demo
//! prints.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor a config value is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=lineage=debug cargo run --bin lineage -- run multiple
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
