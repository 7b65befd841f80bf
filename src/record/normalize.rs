//! Single normalization boundary between raw records and view models.
//!
//! [`normalize`] resolves every optional path of an [`AnalysisRecord`] to a
//! documented default, producing a flat [`NormalizedView`]. Nothing
//! downstream inspects the raw record.

use serde::Serialize;

use super::types::{AnalysisRecord, ScoreEntry};

/// Risk level shown when the record carries none.
pub const UNKNOWN_RISK_LEVEL: &str = "UNKNOWN";

/// Manipulation-risk label shown when the record carries none.
pub const UNKNOWN_MANIPULATION_RISK: &str = "Unknown";

/// Fully defaulted, flat projection of an analysis record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedView {
    /// Overall risk score, 0 when absent. Not clamped here.
    pub overall_risk_score: f64,
    /// Risk level text, `"UNKNOWN"` when absent.
    pub risk_level: String,
    /// Risk description, empty when absent.
    pub risk_description: String,
    /// Component scores in source order, empty when absent.
    pub component_scores: Vec<ScoreEntry>,
    pub temporal: TemporalScores,
    pub source: SourceScores,
    pub factual: FactualScores,
    pub linguistic: LinguisticScores,
    /// Linguistic pattern scores in source order, empty when absent.
    pub pattern_scores: Vec<ScoreEntry>,
    /// Analysis confidence. Left unresolved; each consumer applies its own
    /// default.
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalScores {
    pub temporal_score: f64,
    pub urgency_indicators: f64,
    pub time_references: f64,
    pub manipulation_risk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceScores {
    pub credibility_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactualScores {
    pub verification_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinguisticScores {
    pub linguistic_score: f64,
}

/// Resolve an analysis record into a normalized view. Never fails.
pub fn normalize(record: &AnalysisRecord) -> NormalizedView {
    let risk = record.risk_assessment.as_ref();
    let detailed = record.detailed_analysis.as_ref();

    let temporal = detailed.and_then(|d| d.temporal.as_ref());
    let source = detailed.and_then(|d| d.source.as_ref());
    let factual = detailed.and_then(|d| d.factual.as_ref());
    let linguistic = detailed.and_then(|d| d.linguistic.as_ref());

    NormalizedView {
        overall_risk_score: risk.and_then(|r| r.overall_risk_score).unwrap_or(0.0),
        risk_level: risk
            .and_then(|r| r.risk_level.clone())
            .unwrap_or_else(|| UNKNOWN_RISK_LEVEL.to_string()),
        risk_description: risk
            .and_then(|r| r.risk_description.clone())
            .unwrap_or_default(),
        component_scores: risk
            .and_then(|r| r.component_scores.clone())
            .unwrap_or_default(),
        temporal: TemporalScores {
            temporal_score: temporal.and_then(|t| t.temporal_score).unwrap_or(0.0),
            urgency_indicators: temporal.and_then(|t| t.urgency_indicators).unwrap_or(0.0),
            time_references: temporal.and_then(|t| t.time_references).unwrap_or(0.0),
            manipulation_risk: temporal
                .and_then(|t| t.manipulation_risk.clone())
                .unwrap_or_else(|| UNKNOWN_MANIPULATION_RISK.to_string()),
        },
        source: SourceScores {
            credibility_score: source.and_then(|s| s.credibility_score).unwrap_or(0.0),
        },
        factual: FactualScores {
            verification_score: factual.and_then(|f| f.verification_score).unwrap_or(0.0),
        },
        linguistic: LinguisticScores {
            linguistic_score: linguistic.and_then(|l| l.linguistic_score).unwrap_or(0.0),
        },
        pattern_scores: linguistic
            .and_then(|l| l.pattern_scores.clone())
            .unwrap_or_default(),
        confidence: record.confidence_score,
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
