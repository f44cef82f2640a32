//! File-backed tracing initialization

use std::fs::{self, OpenOptions};
use std::io;

use super::paths;

/// Initialize logging to file (~/.basket/logs/basket.log).
///
/// Log level defaults to WARN and can be raised via `RUST_LOG`. Call once
/// from the host application before constructing the core.
pub fn init_logging() -> io::Result<()> {
    fs::create_dir_all(paths::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    Ok(())
}
