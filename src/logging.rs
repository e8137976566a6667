//! File logging setup.
//!
//! The terminal is owned by the game while it runs, so log lines go to the
//! file named by `TETRIS_LOG_PATH`. With no path configured nothing is
//! installed and every `tracing` macro is a no-op.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::filter::LevelFilter;

use crate::engine::Config;

/// Parse a level name, falling back to `info` for anything unknown.
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::INFO)
}

/// Install the global subscriber described by `config`.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    tracing_subscriber::fmt()
        .with_max_level(parse_level(&config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))?;

    Ok(())
}
