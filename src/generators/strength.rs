// src/generators/strength.rs
use crate::models::{StrengthReport, StrengthTier};

const LONG_LENGTH: usize = 12;
const VERY_LONG_LENGTH: usize = 15;

/// Which scoring criteria a password meets.
#[derive(Debug, Clone, Copy, Default)]
struct Criteria {
    long: bool,
    very_long: bool,
    mixed_case: bool,
    digit: bool,
    symbol: bool,
}

impl Criteria {
    fn of(password: &str) -> Self {
        let length = password.chars().count();
        let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
        let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());

        Self {
            long: length >= LONG_LENGTH,
            very_long: length >= VERY_LONG_LENGTH,
            mixed_case: has_lowercase && has_uppercase,
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    fn points(&self) -> u8 {
        let mut score = 0;
        if self.long {
            score += 25;
        }
        if self.very_long {
            score += 25;
        }
        if self.mixed_case {
            score += 25;
        }
        if self.digit {
            score += 12;
        }
        if self.symbol {
            score += 13;
        }
        score
    }
}

/// Scores a password on a 0-100 scale and maps it to a tier.
///
/// An empty password yields [`StrengthReport::empty`].
pub fn score(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport::empty();
    }

    let score = Criteria::of(password).points();
    StrengthReport {
        score,
        tier: Some(StrengthTier::from_score(score)),
    }
}

/// Hints naming each scoring criterion the password misses.
pub fn feedback(password: &str) -> Vec<String> {
    if password.is_empty() {
        return vec!["Password is empty".to_string()];
    }

    let criteria = Criteria::of(password);
    let mut feedback = Vec::new();

    if !criteria.long {
        feedback.push(format!("Increase password length to at least {} characters", LONG_LENGTH));
    } else if !criteria.very_long {
        feedback.push(format!(
            "For maximum security, use at least {} characters",
            VERY_LONG_LENGTH
        ));
    }
    if !criteria.mixed_case {
        feedback.push("Mix uppercase and lowercase letters".to_string());
    }
    if !criteria.digit {
        feedback.push("Add numbers for better security".to_string());
    }
    if !criteria.symbol {
        feedback.push("Add symbols for better security".to_string());
    }

    feedback
}
