// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};
use std::fmt;

use crate::models::{CharacterClass, CharacterClasses};

#[derive(Subcommand)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Score the strength of a password
    Score {
        /// Password to score (prompted for when omitted)
        password: Option<String>,
    },

    /// Interactive generator (default when no command is given)
    Interactive,
}

// Debug redacts the password passed to `score`.
impl fmt::Debug for CliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliCommand::Generate(args) => f.debug_tuple("Generate").field(args).finish(),
            CliCommand::Score { password } => f
                .debug_struct("Score")
                .field("password", &password.as_ref().map(|_| "<redacted>"))
                .finish(),
            CliCommand::Interactive => f.write_str("Interactive"),
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (8-32)
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(8..=32))]
    pub length: Option<u8>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub count: u8,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy the (first) password to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl GenerateArgs {
    /// Applies the `--no-*` flags on top of the configured defaults.
    pub fn classes(&self, defaults: CharacterClasses) -> CharacterClasses {
        let mut classes = defaults;
        let disabled = [
            (CharacterClass::Uppercase, self.no_uppercase),
            (CharacterClass::Lowercase, self.no_lowercase),
            (CharacterClass::Digit, self.no_numbers),
            (CharacterClass::Symbol, self.no_symbols),
        ];
        for (class, off) in disabled {
            if off {
                classes.set(class, false);
            }
        }
        classes
    }
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            length: None,
            no_uppercase: false,
            no_lowercase: false,
            no_numbers: false,
            no_symbols: false,
            count: 1,
            seed: None,
            copy: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_scored_password() {
        let command = CliCommand::Score {
            password: Some("HunterSecret42!".to_string()),
        };
        let debug = format!("{:?}", command);
        assert!(!debug.contains("HunterSecret42!"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn no_flags_keep_default_classes() {
        let classes = GenerateArgs::default().classes(CharacterClasses::all());
        assert_eq!(classes, CharacterClasses::all());

        let args = GenerateArgs {
            no_uppercase: true,
            no_numbers: true,
            ..GenerateArgs::default()
        };
        let classes = args.classes(CharacterClasses::all());
        assert!(!classes.uppercase && !classes.numbers);
        assert!(classes.lowercase && classes.symbols);
    }
}
