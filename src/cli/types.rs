// src/cli/types.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{CharacterClasses, Password, StrengthReport, StrengthTier};

#[derive(Serialize)]
pub struct GeneratedPassword {
    /// Generated password
    pub password: Password,
    /// Password strength score (0-100)
    pub score: u8,
    /// Strength tier derived from the score
    pub tier: Option<StrengthTier>,
    /// Display width of the strength bar, in percent
    pub width: u8,
}

impl GeneratedPassword {
    pub fn new(password: Password, report: StrengthReport) -> Self {
        Self {
            password,
            score: report.score,
            tier: report.tier,
            width: report.width_percent(),
        }
    }
}

#[derive(Serialize)]
pub struct PasswordGenerationResponse {
    /// Length every password was generated with
    pub length: usize,
    /// Character classes that were enabled
    pub classes: CharacterClasses,
    pub passwords: Vec<GeneratedPassword>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct PasswordAnalysisResponse {
    /// Password strength score (0-100)
    pub score: u8,
    pub tier: Option<StrengthTier>,
    pub width: u8,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
}
