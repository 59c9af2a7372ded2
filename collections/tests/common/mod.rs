#![allow(dead_code)]

/// Initialize a tracing subscriber for tests.
///
/// Output is captured per test; set `RUST_LOG` to change the level.
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // Try to initialize, ignore error if already initialized
    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}
