// src/cli/mod.rs
use clap::Parser;
use thiserror::Error;

pub mod commands;
pub mod handlers;
pub mod menu;
pub mod types;

pub use commands::{CliCommand, GenerateArgs};

pub const TIPS: &str = "💡 Tips: Strong passwords should contain at least 15 characters with \
various character types combined. Avoid using the same password for multiple accounts.";

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate strong random passwords and rate their strength", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<arboard::Error> for CliError {
    fn from(e: arboard::Error) -> Self {
        CliError::ClipboardUnavailable(e.to_string())
    }
}
