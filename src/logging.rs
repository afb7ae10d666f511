use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` directives are honoured on top
/// of the base level (`warn`, or `debug` with `--verbose`).
pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .try_init()
        .map_err(|err| anyhow!("Failed to initialise logging: {err}"))
}
