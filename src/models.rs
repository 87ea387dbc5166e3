// src/models.rs
use serde::Serialize;
use std::fmt;

use crate::generators::GeneratorError;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;
/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 15;

/// Character categories a password can draw from.
///
/// Declaration order is the canonical order used when building the combined
/// alphabet and when prioritising mandatory draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Fixed alphabet for the class. Visually confusable characters
    /// (`0/O`, `1/I/l`) are left out.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => b"ABCDEFGHJKLMNPQRSTUVWXYZ",
            CharacterClass::Lowercase => b"abcdefghijkmnopqrstuvwxyz",
            CharacterClass::Digit => b"23456789",
            CharacterClass::Symbol => b"!@#$%^&*-_=+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Digit => "Number (0-9)",
            CharacterClass::Symbol => "Special (!@#$%)",
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of enabled classes, one toggle per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digit => self.numbers,
            CharacterClass::Symbol => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Digit => self.numbers = enabled,
            CharacterClass::Symbol => self.symbols = enabled,
        }
    }

    /// Enabled classes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<CharacterClass> for CharacterClasses {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut classes = Self::none();
        for class in iter {
            classes.set(class, true);
        }
        classes
    }
}

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationConfig {
    length: usize,
    pub classes: CharacterClasses,
}

impl GenerationConfig {
    /// Builds a config, clamping `length` into `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn new(length: usize, classes: CharacterClasses) -> Self {
        let clamped = length.clamp(MIN_LENGTH, MAX_LENGTH);
        if clamped != length {
            log::warn!(
                "Password length {} is outside {}..={}, using {}",
                length,
                MIN_LENGTH,
                MAX_LENGTH,
                clamped
            );
        }
        Self {
            length: clamped,
            classes,
        }
    }

    /// Strict variant of [`GenerationConfig::new`] that rejects out-of-range lengths.
    pub fn try_new(length: usize, classes: CharacterClasses) -> Result<Self, GeneratorError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GeneratorError::InvalidConfiguration { length });
        }
        Ok(Self { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn with_length(self, length: usize) -> Self {
        Self::new(length, self.classes)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharacterClasses::all(),
        }
    }
}

/// A generated password. Never mutated; the next generation replaces it.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        // Every alphabet is ASCII, so each byte maps to one char.
        Password(bytes.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthTier {
    Weak,
    Average,
    Strong,
    Titan,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => StrengthTier::Weak,
            40..=69 => StrengthTier::Average,
            70..=89 => StrengthTier::Strong,
            _ => StrengthTier::Titan,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Average => "Average",
            StrengthTier::Strong => "Strong",
            StrengthTier::Titan => "Titan",
        }
    }

    /// Progress-bar fill ratio used by the display.
    pub fn width_percent(self) -> u8 {
        match self {
            StrengthTier::Weak => 25,
            StrengthTier::Average => 50,
            StrengthTier::Strong => 75,
            StrengthTier::Titan => 100,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub tier: Option<StrengthTier>,
}

impl StrengthReport {
    /// Report for an empty password: score 0 and no tier.
    pub fn empty() -> Self {
        Self { score: 0, tier: None }
    }

    pub fn width_percent(&self) -> u8 {
        self.tier.map_or(0, StrengthTier::width_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_exclude_confusable_characters() {
        for class in CharacterClass::ALL {
            for c in ['0', 'O', '1', 'I', 'l'] {
                assert!(!class.contains(c), "{:?} contains {}", class, c);
            }
        }
    }

    #[test]
    fn enabled_classes_iterate_in_canonical_order() {
        let classes: CharacterClasses =
            [CharacterClass::Symbol, CharacterClass::Uppercase].into_iter().collect();
        let order: Vec<_> = classes.iter().collect();
        assert_eq!(order, vec![CharacterClass::Uppercase, CharacterClass::Symbol]);
        assert_eq!(CharacterClasses::none().count(), 0);
    }

    #[test]
    fn new_clamps_length_into_range() {
        assert_eq!(GenerationConfig::new(3, CharacterClasses::all()).length(), MIN_LENGTH);
        assert_eq!(GenerationConfig::new(64, CharacterClasses::all()).length(), MAX_LENGTH);
        assert_eq!(GenerationConfig::new(20, CharacterClasses::all()).length(), 20);
    }

    #[test]
    fn try_new_rejects_out_of_range_length() {
        assert!(matches!(
            GenerationConfig::try_new(7, CharacterClasses::all()),
            Err(GeneratorError::InvalidConfiguration { length: 7 })
        ));
        assert!(GenerationConfig::try_new(33, CharacterClasses::all()).is_err());
        assert!(GenerationConfig::try_new(8, CharacterClasses::none()).is_ok());
    }

    #[test]
    fn default_config_matches_interactive_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.length(), 15);
        assert_eq!(config.classes, CharacterClasses::all());
    }

    #[test]
    fn tier_boundaries_are_half_open() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(39), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(40), StrengthTier::Average);
        assert_eq!(StrengthTier::from_score(69), StrengthTier::Average);
        assert_eq!(StrengthTier::from_score(70), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_score(89), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_score(90), StrengthTier::Titan);
        assert_eq!(StrengthTier::from_score(100), StrengthTier::Titan);
    }

    #[test]
    fn models_serialize_for_json_output() {
        assert_eq!(serde_json::to_string(&CharacterClass::Digit).unwrap(), "\"digit\"");
        assert_eq!(serde_json::to_string(&StrengthTier::Titan).unwrap(), "\"Titan\"");
        let classes = serde_json::to_value(CharacterClasses::none()).unwrap();
        assert_eq!(classes["uppercase"], false);
        let report = serde_json::to_value(StrengthReport::empty()).unwrap();
        assert_eq!(report["score"], 0);
        assert!(report["tier"].is_null());
    }

    #[test]
    fn password_debug_hides_contents() {
        let password = Password::from_bytes(b"Secret!42abcdefg".to_vec());
        let debug = format!("{:?}", password);
        assert!(!debug.contains("Secret"));
        assert_eq!(password.to_string(), "Secret!42abcdefg");
    }
}
