//! File-based tracing setup
//!
//! The terminal is owned by the UI, so diagnostics go to a log file.
//! `LAZY_POSTMAN_TUI_LOG` overrides the configured level (EnvFilter syntax).

use crate::config::LoggingConfig;
use color_eyre::{eyre::eyre, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "LAZY_POSTMAN_TUI_LOG";

pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("Failed to initialise logging: {e}"))?;

    tracing::debug!("Logging to {}", config.file.display());
    Ok(())
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    Ok(filter
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?))
}
