//! Score-to-color banding.
//!
//! Three independent threshold tables:
//! - risk scores (0-100, higher is worse) map to five [`RiskTier`]s
//! - linguistic pattern scores (0-100, higher is cleaner) map to three [`PatternTier`]s
//! - confidence (0.0-1.0) maps to five [`ConfidenceTier`]s, each with a description
//!
//! Every lookup is total: non-finite input is treated as the lowest value and
//! out-of-range input falls into the nearest boundary band.

use serde::{Deserialize, Serialize};

use super::theme::{ColorToken, Theme};

/// Clamp a 0-100 score, mapping NaN to 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

/// Clamp a 0.0-1.0 ratio, mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Risk tiers
// ============================================================================

/// Severity tier of an overall risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// [0, 15)
    Minimal,
    /// [15, 30)
    Low,
    /// [30, 50)
    Medium,
    /// [50, 70)
    High,
    /// [70, 100]
    Critical,
}

impl RiskTier {
    /// All tiers, lowest first.
    pub const ALL: [RiskTier; 5] = [
        RiskTier::Minimal,
        RiskTier::Low,
        RiskTier::Medium,
        RiskTier::High,
        RiskTier::Critical,
    ];

    /// Tier for a risk score.
    pub fn for_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= 70.0 {
            RiskTier::Critical
        } else if score >= 50.0 {
            RiskTier::High
        } else if score >= 30.0 {
            RiskTier::Medium
        } else if score >= 15.0 {
            RiskTier::Low
        } else {
            RiskTier::Minimal
        }
    }

    /// Lower (inclusive) and upper bound of the tier.
    ///
    /// The upper bound is exclusive except for `Critical`, which closes at 100.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            RiskTier::Minimal => (0.0, 15.0),
            RiskTier::Low => (15.0, 30.0),
            RiskTier::Medium => (30.0, 50.0),
            RiskTier::High => (50.0, 70.0),
            RiskTier::Critical => (70.0, 100.0),
        }
    }

    /// Color slot for the tier.
    pub fn token(self) -> ColorToken {
        match self {
            RiskTier::Minimal => ColorToken::Success,
            RiskTier::Low => ColorToken::Teal,
            RiskTier::Medium => ColorToken::Warning,
            RiskTier::High => ColorToken::Orange,
            RiskTier::Critical => ColorToken::Danger,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Minimal => write!(f, "minimal"),
            RiskTier::Low => write!(f, "low"),
            RiskTier::Medium => write!(f, "medium"),
            RiskTier::High => write!(f, "high"),
            RiskTier::Critical => write!(f, "critical"),
        }
    }
}

// ============================================================================
// Pattern tiers
// ============================================================================

/// Tier of a linguistic pattern score. Higher scores mean fewer
/// manipulation patterns were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternTier {
    /// >= 80
    Clear,
    /// >= 60
    Caution,
    /// < 60
    Alert,
}

impl PatternTier {
    /// Tier for a pattern score.
    pub fn for_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= 80.0 {
            PatternTier::Clear
        } else if score >= 60.0 {
            PatternTier::Caution
        } else {
            PatternTier::Alert
        }
    }

    /// Color slot for the tier.
    pub fn token(self) -> ColorToken {
        match self {
            PatternTier::Clear => ColorToken::Success,
            PatternTier::Caution => ColorToken::Warning,
            PatternTier::Alert => ColorToken::Danger,
        }
    }
}

// ============================================================================
// Confidence tiers
// ============================================================================

/// Tier of an analysis confidence value.
///
/// Lower bounds are closed except at 0.7, which is open: a confidence of
/// exactly 0.7 is `Moderate`, not `Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// < 0.6
    Lower,
    /// [0.6, 0.7]
    Moderate,
    /// (0.7, 0.8)
    Good,
    /// [0.8, 0.9)
    High,
    /// >= 0.9
    VeryHigh,
}

impl ConfidenceTier {
    /// Tier for a confidence value.
    pub fn for_confidence(confidence: f64) -> Self {
        let confidence = clamp_unit(confidence);
        if confidence >= 0.9 {
            ConfidenceTier::VeryHigh
        } else if confidence >= 0.8 {
            ConfidenceTier::High
        } else if confidence > 0.7 {
            ConfidenceTier::Good
        } else if confidence >= 0.6 {
            ConfidenceTier::Moderate
        } else {
            ConfidenceTier::Lower
        }
    }

    /// Sentence shown under the confidence ring.
    pub fn description(self) -> &'static str {
        match self {
            ConfidenceTier::VeryHigh => "Very high confidence in analysis results",
            ConfidenceTier::High => "High confidence in analysis results",
            ConfidenceTier::Good => "Good confidence in analysis results",
            ConfidenceTier::Moderate => "Moderate confidence in analysis results",
            ConfidenceTier::Lower => "Lower confidence - results should be interpreted carefully",
        }
    }
}

/// Color slot of a confidence value.
///
/// A three-step table of its own: >= 0.8 success, >= 0.6 warning, else
/// danger.
pub fn confidence_token(confidence: f64) -> ColorToken {
    let confidence = clamp_unit(confidence);
    if confidence >= 0.8 {
        ColorToken::Success
    } else if confidence >= 0.6 {
        ColorToken::Warning
    } else {
        ColorToken::Danger
    }
}

// ============================================================================
// Mapper
// ============================================================================

/// A resolved band: the tier, its color slot and the concrete color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band<T> {
    pub tier: T,
    pub token: ColorToken,
    pub color: String,
}

/// Maps scores to bands using a fixed palette.
#[derive(Debug, Clone, Default)]
pub struct ColorBandMapper {
    theme: Theme,
}

impl ColorBandMapper {
    /// Create a mapper bound to the given palette.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// The palette colors are resolved against.
    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Resolve a token against the palette.
    pub fn color(&self, token: ColorToken) -> String {
        self.theme.color(token).to_string()
    }

    /// Band for an overall risk score.
    pub fn band_for_risk_score(&self, score: f64) -> Band<RiskTier> {
        let tier = RiskTier::for_score(score);
        self.resolve(tier, tier.token())
    }

    /// Band for a linguistic pattern score.
    pub fn band_for_pattern_score(&self, score: f64) -> Band<PatternTier> {
        let tier = PatternTier::for_score(score);
        self.resolve(tier, tier.token())
    }

    /// Band for an analysis confidence value.
    pub fn band_for_confidence(&self, confidence: f64) -> Band<ConfidenceTier> {
        self.resolve(
            ConfidenceTier::for_confidence(confidence),
            confidence_token(confidence),
        )
    }

    fn resolve<T>(&self, tier: T, token: ColorToken) -> Band<T> {
        Band {
            tier,
            token,
            color: self.color(token),
        }
    }
}
