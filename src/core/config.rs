// src/core/config.rs
use log::LevelFilter;
use std::env;
use std::path::PathBuf;

use crate::models::{CharacterClasses, GenerationConfig, DEFAULT_LENGTH};

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_classes: CharacterClasses,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_LENGTH,
            default_classes: CharacterClasses::all(),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unknown or malformed values keep
    /// their defaults and produce a warning. Warnings are returned rather
    /// than logged because the logger is configured from this result.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        let toggles = [
            ("DEFAULT_INCLUDE_UPPERCASE", &mut config.default_classes.uppercase),
            ("DEFAULT_INCLUDE_LOWERCASE", &mut config.default_classes.lowercase),
            ("DEFAULT_INCLUDE_NUMBERS", &mut config.default_classes.numbers),
            ("DEFAULT_INCLUDE_SYMBOLS", &mut config.default_classes.symbols),
        ];
        for (key, flag) in toggles {
            if let Some(val) = lookup(key) {
                match parse_bool(&val) {
                    Some(enabled) => *flag = enabled,
                    None => warnings.push(format!("Ignoring invalid {} '{}'", key, val)),
                }
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Unknown log level '{}', keeping {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    /// Generation settings to start from, with the length clamped into range.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(self.default_password_length, self.default_classes)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> (Config, Vec<String>) {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let (config, warnings) = config_from(&[]);
        assert!(warnings.is_empty());
        assert_eq!(config.default_password_length, 15);
        assert_eq!(config.default_classes, CharacterClasses::all());
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn reads_generation_defaults() {
        let (config, _) = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "20"),
            ("DEFAULT_INCLUDE_SYMBOLS", "false"),
            ("DEFAULT_INCLUDE_NUMBERS", "no"),
        ]);
        let generation = config.generation_config();
        assert_eq!(generation.length(), 20);
        assert!(generation.classes.uppercase);
        assert!(generation.classes.lowercase);
        assert!(!generation.classes.numbers);
        assert!(!generation.classes.symbols);
    }

    #[test]
    fn out_of_range_length_is_clamped_in_generation_config() {
        let (config, _) = config_from(&[("DEFAULT_PASSWORD_LENGTH", "64")]);
        assert_eq!(config.default_password_length, 64);
        assert_eq!(config.generation_config().length(), 32);
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let (config, warnings) = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "long"),
            ("DEFAULT_INCLUDE_UPPERCASE", "maybe"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.default_password_length, 15);
        assert!(config.default_classes.uppercase);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(
            warnings,
            vec![
                "Ignoring invalid DEFAULT_PASSWORD_LENGTH 'long'".to_string(),
                "Ignoring invalid DEFAULT_INCLUDE_UPPERCASE 'maybe'".to_string(),
                "Unknown log level 'loud', keeping WARN".to_string(),
            ]
        );
    }

    #[test]
    fn reads_logging_settings() {
        let (config, _) = config_from(&[("LOG_LEVEL", "DEBUG"), ("LOG_FILE", "logs/passgen.log")]);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/passgen.log")));
    }
}
