// src/core/session.rs
use crate::generators::{PasswordGenerator, RandomSource};
use crate::models::{CharacterClass, GenerationConfig, Password, StrengthReport};

/// Holds the current configuration and password for an interactive front end.
///
/// Every configuration change regenerates the password, mirroring a form
/// that refreshes its output whenever a control changes.
pub struct GeneratorSession<R: RandomSource> {
    generator: PasswordGenerator,
    config: GenerationConfig,
    password: Password,
    rng: R,
}

impl<R: RandomSource> GeneratorSession<R> {
    pub fn new(config: GenerationConfig, mut rng: R) -> Self {
        let generator = PasswordGenerator::new();
        let password = generator.generate_password(&config, &mut rng);
        Self {
            generator,
            config,
            password,
            rng,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn report(&self) -> StrengthReport {
        self.generator.analyze_password_strength(self.password.as_str())
    }

    /// Replaces the current password with a fresh one.
    pub fn regenerate(&mut self) -> &Password {
        self.password = self.generator.generate_password(&self.config, &mut self.rng);
        &self.password
    }

    pub fn set_config(&mut self, config: GenerationConfig) -> &Password {
        self.config = config;
        log::debug!(
            "Configuration changed: length {}, {} class(es)",
            config.length(),
            config.classes.count()
        );
        self.regenerate()
    }

    pub fn set_length(&mut self, length: usize) -> &Password {
        self.set_config(self.config.with_length(length))
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) -> &Password {
        let mut config = self.config;
        config.classes.set(class, enabled);
        self.set_config(config)
    }

    pub fn toggle(&mut self, class: CharacterClass) -> &Password {
        let enabled = self.config.classes.is_enabled(class);
        self.set_class(class, !enabled)
    }
}
