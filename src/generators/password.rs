// src/generators/password.rs
use crate::generators::random::{pick, shuffle, RandomSource};
use crate::models::{CharacterClass, CharacterClasses, GenerationConfig, Password, StrengthReport};

/// Stateless front for the generation and scoring routines.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generates a password of exactly `config.length()` characters.
    ///
    /// Every enabled class is represented at least once. With no class
    /// enabled the password is drawn from the lowercase alphabet alone.
    pub fn generate_password<R: RandomSource + ?Sized>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Password {
        let buffer = build(config.length(), &config.classes, rng);
        log::debug!(
            "Generated password of length {} from {} class(es)",
            buffer.len(),
            config.classes.count()
        );
        Password::from_bytes(buffer)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthReport {
        crate::generators::strength::score(password)
    }
}

/// Generates a password using the thread-local RNG.
pub fn generate(config: &GenerationConfig) -> Password {
    PasswordGenerator::new().generate_password(config, &mut rand::thread_rng())
}

/// Concatenation of the enabled alphabets in canonical order, or the
/// lowercase alphabet when nothing is enabled.
pub(crate) fn combined_alphabet(classes: &CharacterClasses) -> Vec<u8> {
    let mut chars: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.alphabet().iter().copied())
        .collect();

    if chars.is_empty() {
        chars.extend_from_slice(CharacterClass::Lowercase.alphabet());
    }

    chars
}

// Not limited to MIN_LENGTH..=MAX_LENGTH so the short-length policy can be
// exercised directly.
fn build<R: RandomSource + ?Sized>(
    length: usize,
    classes: &CharacterClasses,
    rng: &mut R,
) -> Vec<u8> {
    let chars = combined_alphabet(classes);
    let mut buffer = Vec::with_capacity(length);

    // One mandatory draw per enabled class. When there are more classes than
    // slots, lower-priority classes (later in canonical order) are dropped.
    for class in classes.iter().take(length) {
        buffer.push(pick(rng, class.alphabet()));
    }

    while buffer.len() < length {
        buffer.push(pick(rng, &chars));
    }

    shuffle(rng, &mut buffer);
    buffer.truncate(length);
    buffer
}
