//! Logger bootstrap.  Diagnostics go to stderr so they never interleave with the menu on stdout.

use env_logger::{Builder, Target};
use log::{info, LevelFilter, SetLoggerError};

/// Install the global logger at the given level.  Fails if a logger is already installed.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format_timestamp_secs()
        .try_init()?;

    info!("event=app_start version={} level={}", env!("CARGO_PKG_VERSION"), level);
    Ok(())
}
