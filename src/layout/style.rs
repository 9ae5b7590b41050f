//! Edge styling and relationship-strength banding.

use super::types::EdgeStyle;

const INDIGO: &str = "#818cf8";
const SKY: &str = "#93c5fd";
const SLATE: &str = "#e2e8f0";

pub const STRONG_THRESHOLD: f64 = 0.7;
pub const MEDIUM_THRESHOLD: f64 = 0.4;

/// Map a declared strength into [0, 1]. NaN counts as no relationship.
pub fn clamp_strength(strength: f64) -> f64 {
    if strength.is_nan() {
        0.0
    } else {
        strength.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
}

impl StrengthBand {
    pub fn of(strength: f64) -> Self {
        let s = clamp_strength(strength);
        if s >= STRONG_THRESHOLD {
            StrengthBand::Strong
        } else if s >= MEDIUM_THRESHOLD {
            StrengthBand::Medium
        } else {
            StrengthBand::Weak
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StrengthBand::Strong => "#ef4444",
            StrengthBand::Medium => "#f97316",
            StrengthBand::Weak => "#3b82f6",
        }
    }
}

impl EdgeStyle {
    fn plain(color: &str, stroke_width: f64) -> Self {
        Self {
            color: color.to_string(),
            stroke_width,
            opacity: 1.0,
            animated: false,
            arrow: false,
        }
    }

    /// Root to chapter.
    pub fn course_link() -> Self {
        Self {
            arrow: true,
            ..Self::plain(INDIGO, 2.0)
        }
    }

    /// Chapter to following chapter.
    pub fn sequence() -> Self {
        Self {
            opacity: 0.5,
            animated: true,
            ..Self::plain(INDIGO, 1.0)
        }
    }

    pub fn chapter_section() -> Self {
        Self::plain(SKY, 1.5)
    }

    pub fn section_subsection() -> Self {
        Self::plain(SLATE, 1.0)
    }

    /// Colour banded by strength; width and opacity scale with it.
    pub fn relationship(strength: f64) -> Self {
        let s = clamp_strength(strength);
        Self {
            color: StrengthBand::of(s).color().to_string(),
            stroke_width: (s * 4.0).max(1.0),
            opacity: 0.6 + s * 0.4,
            animated: true,
            arrow: false,
        }
    }
}

/// Hover text for a relationship edge: `"builds upon (80% strength)"`.
pub fn relationship_tooltip(relationship: &str, strength: f64) -> String {
    let percent = (clamp_strength(strength) * 100.0).round() as u32;
    format!("{relationship} ({percent}% strength)")
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_style.rs"]
mod tests;
