//! Logging setup
//!
//! Logs go to stderr so the console transcript on stdout stays clean.
//! Level comes from `RUST_LOG` (default: warn), e.g. `RUST_LOG=bistro=debug`.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}
