// src/utils/format.rs
use console::Style;

use crate::models::{StrengthReport, StrengthTier};

const BAR_CELLS: usize = 20;

// Color for a tier, matching the red/yellow/blue/green scale
pub fn tier_style(tier: StrengthTier) -> Style {
    match tier {
        StrengthTier::Weak => Style::new().red(),
        StrengthTier::Average => Style::new().yellow(),
        StrengthTier::Strong => Style::new().blue(),
        StrengthTier::Titan => Style::new().green(),
    }
}

/// Fixed-width bar filled to the tier's display width.
pub fn strength_bar(report: &StrengthReport) -> String {
    let filled = BAR_CELLS * report.width_percent() as usize / 100;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled));

    match report.tier {
        Some(tier) => tier_style(tier).apply_to(bar).to_string(),
        None => bar,
    }
}

// One-line summary: "Security Strength: Titan (100/100)"
pub fn strength_line(report: &StrengthReport) -> String {
    match report.tier {
        Some(tier) => format!(
            "Security Strength: {} ({}/100)",
            tier_style(tier).bold().apply_to(tier.label()),
            report.score
        ),
        None => "Security Strength: -".to_string(),
    }
}
