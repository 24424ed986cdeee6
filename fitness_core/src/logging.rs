//! Tracing setup shared by the workspace binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging: compact format on stderr, `RUST_LOG` filtering,
/// default level `info`.
///
/// Logs go to stderr so report lines on stdout stay clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
