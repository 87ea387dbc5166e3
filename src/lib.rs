//! Random password generation from selectable character classes, with a
//! heuristic strength score.
//!
//! ```
//! use rust_passgen::generators::{generate, score};
//! use rust_passgen::models::{CharacterClasses, GenerationConfig};
//!
//! let config = GenerationConfig::new(16, CharacterClasses::all());
//! let password = generate(&config);
//! assert_eq!(password.len(), 16);
//! assert_eq!(score(password.as_str()).score, 100);
//! ```

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::core::config::Config;
pub use crate::generators::{generate, score, PasswordGenerator, RandomSource};
pub use crate::models::{
    CharacterClass, CharacterClasses, GenerationConfig, Password, StrengthReport, StrengthTier,
};
