// src/cli/handlers.rs
use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cli::types::{GeneratedPassword, PasswordAnalysisResponse, PasswordGenerationResponse};
use crate::cli::{CliError, GenerateArgs, TIPS};
use crate::core::config::Config;
use crate::generators::{feedback, score, PasswordGenerator, RandomSource};
use crate::models::{GenerationConfig, Password};
use crate::utils::{strength_bar, strength_line};

/// Resolves command-line flags against the configured defaults.
pub fn generation_config(args: &GenerateArgs, config: &Config) -> GenerationConfig {
    let length = args
        .length
        .map_or(config.default_password_length, usize::from);
    GenerationConfig::new(length, args.classes(config.default_classes))
}

pub fn generate_batch<R: RandomSource>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> PasswordGenerationResponse {
    let generator = PasswordGenerator::new();
    let passwords = (0..count)
        .map(|_| {
            let password = generator.generate_password(config, rng);
            let report = generator.analyze_password_strength(password.as_str());
            GeneratedPassword::new(password, report)
        })
        .collect();

    PasswordGenerationResponse {
        length: config.length(),
        classes: config.classes,
        passwords,
        generated_at: Utc::now(),
    }
}

pub fn render_generation(response: &PasswordGenerationResponse) -> String {
    let mut lines = Vec::new();
    for entry in &response.passwords {
        let report = crate::models::StrengthReport {
            score: entry.score,
            tier: entry.tier,
        };
        lines.push(entry.password.to_string());
        lines.push(format!("  {} {}", strength_bar(&report), strength_line(&report)));
    }
    lines.join("\n")
}

pub fn analyze(password: &str) -> PasswordAnalysisResponse {
    let report = score(password);
    PasswordAnalysisResponse {
        score: report.score,
        tier: report.tier,
        width: report.width_percent(),
        feedback: feedback(password),
    }
}

pub fn render_analysis(analysis: &PasswordAnalysisResponse) -> String {
    let report = crate::models::StrengthReport {
        score: analysis.score,
        tier: analysis.tier,
    };
    let mut lines = vec![strength_line(&report), strength_bar(&report)];
    for hint in &analysis.feedback {
        lines.push(format!("  • {}", hint));
    }
    lines.join("\n")
}

pub fn copy_to_clipboard(password: &Password) -> Result<(), CliError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(password.as_str().to_owned())?;
    log::info!("Copied password to clipboard");
    Ok(())
}

pub fn handle_generate(args: &GenerateArgs, config: &Config, json: bool) -> Result<(), CliError> {
    let generation = generation_config(args, config);
    let count = usize::from(args.count);

    let response = match args.seed {
        Some(seed) => {
            log::debug!("Using seeded generator");
            generate_batch(&generation, count, &mut ChaCha8Rng::seed_from_u64(seed))
        }
        None => generate_batch(&generation, count, &mut rand::thread_rng()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render_generation(&response));
        if response.passwords.len() == 1 {
            println!("\n{}", TIPS);
        }
    }

    if args.copy {
        if let Some(first) = response.passwords.first() {
            match copy_to_clipboard(&first.password) {
                Ok(()) => eprintln!("📋 Copied to clipboard"),
                Err(e) => {
                    log::warn!("{}", e);
                    eprintln!("⚠️ {}", e);
                }
            }
        }
    }

    Ok(())
}

pub fn handle_score(password: Option<String>, json: bool) -> Result<(), CliError> {
    let password = match password {
        Some(password) => password,
        None => inquire::Password::new("Password to score:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?,
    };

    let analysis = analyze(&password);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", render_analysis(&analysis));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterClass, CharacterClasses, StrengthTier};

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    #[test]
    fn flags_override_configured_defaults() {
        let args = GenerateArgs {
            length: Some(20),
            no_symbols: true,
            ..GenerateArgs::default()
        };
        let generation = generation_config(&args, &Config::default());
        assert_eq!(generation.length(), 20);
        assert!(!generation.classes.is_enabled(CharacterClass::Symbol));
        assert!(generation.classes.is_enabled(CharacterClass::Uppercase));
    }

    #[test]
    fn configured_length_is_used_when_flag_is_absent() {
        let config = Config {
            default_password_length: 24,
            ..Config::default()
        };
        let generation = generation_config(&GenerateArgs::default(), &config);
        assert_eq!(generation.length(), 24);
    }

    #[test]
    fn batch_scores_every_password() {
        let generation = GenerationConfig::new(16, CharacterClasses::all());
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let response = generate_batch(&generation, 5, &mut rng);

        assert_eq!(response.passwords.len(), 5);
        for entry in &response.passwords {
            assert_eq!(entry.password.len(), 16);
            // 16 chars with every class enabled always meets every criterion.
            assert_eq!(entry.score, 100);
            assert_eq!(entry.tier, Some(StrengthTier::Titan));
            assert_eq!(entry.width, 100);
        }
    }

    #[test]
    fn generation_json_has_expected_shape() {
        let generation = GenerationConfig::new(10, CharacterClasses::none());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let response = generate_batch(&generation, 1, &mut rng);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["length"], 10);
        assert_eq!(value["classes"]["symbols"], false);
        assert_eq!(value["passwords"][0]["password"].as_str().unwrap().len(), 10);
        // Lowercase only, under 12 characters.
        assert_eq!(value["passwords"][0]["score"], 0);
        assert_eq!(value["passwords"][0]["tier"], "Weak");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn analysis_reports_score_and_feedback() {
        let analysis = analyze("abcdefghijkl");
        assert_eq!(analysis.score, 25);
        assert_eq!(analysis.tier, Some(StrengthTier::Weak));
        assert_eq!(analysis.width, 25);
        assert_eq!(analysis.feedback.len(), 4);

        let rendered = plain(&render_analysis(&analysis));
        assert!(rendered.starts_with("Security Strength: Weak (25/100)"));
        assert!(rendered.contains("Add symbols"));
    }

    #[test]
    fn rendered_generation_lists_password_then_strength() {
        let generation = GenerationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let response = generate_batch(&generation, 2, &mut rng);
        let rendered = plain(&render_generation(&response));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], response.passwords[0].password.as_str());
        assert!(lines[1].contains("Security Strength:"));
    }
}
