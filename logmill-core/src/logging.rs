use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics on stderr, keeping stdout clean for the report.
///
/// `RUST_LOG` wins when set; otherwise only errors are shown, or everything
/// down to debug with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
