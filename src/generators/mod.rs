// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod random;
pub mod strength;

pub use password::{generate, PasswordGenerator};
pub use random::RandomSource;
pub use strength::{feedback, score};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid configuration: password length {length} must be between {min} and {max}", min = crate::models::MIN_LENGTH, max = crate::models::MAX_LENGTH)]
    InvalidConfiguration { length: usize },
}
