// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Builds the logger from the configuration. `RUST_LOG`, when set, wins over
/// the configured level.
pub fn builder(config: &Config) -> Result<Builder> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(config.log_level.to_string()));
    builder
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    match &config.log_file {
        Some(path) => {
            builder.target(Target::Pipe(Box::new(open_log_file(path)?)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    Ok(builder)
}

/// Installs the global logger.
pub fn init(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    log::debug!("Logging initialized at level {}", config.log_level);
    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
