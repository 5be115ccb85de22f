/*
 * tier.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Resource tiers offered by the launcher.
 */

//! Resource tier validation.
//!
//! A tier is a label for a resource class. The actual CPU/RAM allocation
//! is owned by the deployment chart; the labels here only describe it.

use serde::Serialize;

use crate::warning::ReproducibleWarning;

/// A resource tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Light,
    /// Used when no tier is configured or the configured one is invalid
    #[default]
    Medium,
    Heavy,
    Gpu,
}

impl Tier {
    /// All tiers, smallest first.
    pub const ALL: [Tier; 4] = [Tier::Light, Tier::Medium, Tier::Heavy, Tier::Gpu];

    /// Parse an exact, case-sensitive tier name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "medium" => Some(Self::Medium),
            "heavy" => Some(Self::Heavy),
            "gpu" => Some(Self::Gpu),
            _ => None,
        }
    }

    /// Convert to string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
            Self::Gpu => "gpu",
        }
    }

    /// Built-in display label.
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Light => "Light (2 CPU, 8GB RAM)",
            Self::Medium => "Medium (6 CPU, 24GB RAM)",
            Self::Heavy => "Heavy (10 CPU, 48GB RAM)",
            Self::Gpu => "GPU (8 CPU, 32GB RAM, 1 GPU)",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validate a resolved tier value, substituting [`Tier::Medium`] on mismatch.
///
/// The warning names the rejected value.
pub fn validate_tier(resolved: &str) -> (Tier, Option<ReproducibleWarning>) {
    match Tier::parse(resolved) {
        Some(tier) => (tier, None),
        None => {
            let fallback = Tier::default();
            let warning = ReproducibleWarning::InvalidTier {
                value: resolved.to_string(),
                fallback: fallback.as_str(),
            };
            (fallback, Some(warning))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tiers_pass_through() {
        for tier in Tier::ALL {
            let (validated, warning) = validate_tier(tier.as_str());
            assert_eq!(validated, tier);
            assert!(warning.is_none());
        }
    }

    #[test]
    fn test_invalid_tier_falls_back_to_medium() {
        let (tier, warning) = validate_tier("super-heavy");
        assert_eq!(tier, Tier::Medium);

        let warning = warning.expect("expected a warning");
        assert!(warning.to_string().contains("super-heavy"));
        assert_eq!(
            warning,
            ReproducibleWarning::InvalidTier {
                value: "super-heavy".to_string(),
                fallback: "medium",
            }
        );
    }

    #[test]
    fn test_tier_match_is_case_sensitive() {
        let (tier, warning) = validate_tier("Heavy");
        assert_eq!(tier, Tier::Medium);
        assert!(warning.is_some());

        let (_, warning) = validate_tier(" gpu");
        assert!(warning.is_some());
    }

    #[test]
    fn test_empty_tier_is_invalid() {
        let (tier, warning) = validate_tier("");
        assert_eq!(tier, Tier::Medium);
        assert!(warning.is_some());
    }

    #[test]
    fn test_default_labels() {
        assert_eq!(Tier::Light.default_label(), "Light (2 CPU, 8GB RAM)");
        assert_eq!(Tier::Medium.default_label(), "Medium (6 CPU, 24GB RAM)");
        assert_eq!(Tier::Heavy.default_label(), "Heavy (10 CPU, 48GB RAM)");
        assert_eq!(Tier::Gpu.default_label(), "GPU (8 CPU, 32GB RAM, 1 GPU)");
    }

    #[test]
    fn test_display() {
        assert_eq!(Tier::Gpu.to_string(), "gpu");
    }
}
