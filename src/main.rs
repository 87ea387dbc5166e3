use anyhow::Context;
use clap::Parser;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rust_passgen::cli::{self, Args, CliCommand, GenerateArgs};
use rust_passgen::core::config::Config;
use rust_passgen::{logging, utils};

fn main() -> anyhow::Result<()> {
    let mut warnings = utils::load_env_files();

    let args = Args::parse();
    let (config, config_warnings) = Config::load();
    warnings.extend(config_warnings);

    logging::init(&config).context("Failed to initialize logging")?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Generate(generate)) => {
            cli::handlers::handle_generate(&generate, &config, args.json)?;
        }
        Some(CliCommand::Score { password }) => {
            cli::handlers::handle_score(password, args.json)?;
        }
        None if args.json => {
            cli::handlers::handle_generate(&GenerateArgs::default(), &config, true)?;
        }
        Some(CliCommand::Interactive) | None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, leaving interactive mode");
                    should_exit.store(true, Ordering::SeqCst);
                })
                .context("Failed to set Ctrl+C handler")?;
            }

            cli::menu::run_cli_menu(&config, should_exit)?;
        }
    }

    Ok(())
}
