//! Diagnostic tracing for the bootstrap tool.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. The echoed
//! commands, README preview and URLs the operator acts on are plain stdout
//! and unaffected by it.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset, so missing README
/// patterns are always reported.
///
/// # Example
/// ```bash
/// RUST_LOG=nanogenmo=debug nanogenmo --update-readme
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
