// src/cli/menu.rs
use inquire::{CustomType, InquireError, MultiSelect, Select};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers::copy_to_clipboard;
use crate::cli::{CliError, TIPS};
use crate::core::config::Config;
use crate::core::session::GeneratorSession;
use crate::generators::RandomSource;
use crate::models::{CharacterClass, CharacterClasses, MAX_LENGTH, MIN_LENGTH};
use crate::utils::{strength_bar, strength_line};

const REGENERATE: &str = "🔄  Create new password";
const CHANGE_LENGTH: &str = "📏  Change length";
const CHANGE_CLASSES: &str = "🔤  Choose character types";
const COPY: &str = "📋  Copy to clipboard";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), CliError> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 RUST PASSWORD FORGE        ║");
    println!("╚══════════════════════════════════════╝");
    println!("{}\n", TIPS);

    let mut session = GeneratorSession::new(config.generation_config(), rand::thread_rng());

    while !should_exit.load(Ordering::SeqCst) {
        print_current(&session);

        let options = vec![REGENERATE, CHANGE_LENGTH, CHANGE_CLASSES, COPY, EXIT];
        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let result = match choice {
            REGENERATE => {
                session.regenerate();
                Ok(())
            }
            CHANGE_LENGTH => change_length(&mut session),
            CHANGE_CLASSES => change_classes(&mut session),
            COPY => {
                match copy_to_clipboard(session.password()) {
                    Ok(()) => println!("✅ Copied!"),
                    Err(e) => println!("❌ {}", e),
                }
                Ok(())
            }
            _ => break,
        };

        match result {
            Ok(()) => {}
            Err(CliError::Prompt(InquireError::OperationCanceled)) => {}
            Err(CliError::Prompt(InquireError::OperationInterrupted)) => break,
            Err(e) => return Err(e),
        }
    }

    log::info!("Interactive session finished");
    println!("👋 Goodbye!");
    Ok(())
}

fn print_current<R: RandomSource>(session: &GeneratorSession<R>) {
    let report = session.report();
    println!();
    println!("🔐 {}", console::style(session.password()).bold());
    println!("   {}", strength_line(&report));
    println!("   {}", strength_bar(&report));
    println!(
        "   Length: {} character(s) | {}",
        session.config().length(),
        describe_classes(&session.config().classes)
    );
    println!();
}

fn describe_classes(classes: &CharacterClasses) -> String {
    if classes.is_empty() {
        return "no types selected (lowercase only)".to_string();
    }
    classes
        .iter()
        .map(CharacterClass::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn change_length<R: RandomSource>(session: &mut GeneratorSession<R>) -> Result<(), CliError> {
    let length = CustomType::<usize>::new("Password length:")
        .with_default(session.config().length())
        .with_help_message(&format!("Between {} and {}", MIN_LENGTH, MAX_LENGTH))
        .with_error_message("Please type a whole number")
        .prompt()?;

    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        println!("⚠️ Length must be between {} and {}", MIN_LENGTH, MAX_LENGTH);
    }
    session.set_length(length);
    Ok(())
}

fn change_classes<R: RandomSource>(session: &mut GeneratorSession<R>) -> Result<(), CliError> {
    let current = session.config().classes;
    let defaults: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| current.is_enabled(**class))
        .map(|(i, _)| i)
        .collect();

    let selected = MultiSelect::new("Character types:", CharacterClass::ALL.to_vec())
        .with_default(&defaults)
        .prompt()?;

    let mut config = *session.config();
    config.classes = selected.into_iter().collect();
    session.set_config(config);
    Ok(())
}
