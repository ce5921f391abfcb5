//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `bizday=info` when no directive for the crate is given.
/// Calling it more than once is a no-op, and so is calling it after another
/// global subscriber has been installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "bizday=info".parse() {
            filter = filter.add_directive(directive);
        }

        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("bizday tracing initialized.");
        }
    });
}
