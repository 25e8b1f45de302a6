// logging.rs - Console tracing subscriber
//
// RUST_LOG wins when set; otherwise `info`, or `debug` with --verbose
// (one event per placed feature).

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) -> Result<()> {
    let base_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("logger initialization failed: {e}"))
}
