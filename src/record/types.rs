//! Input schema of an analysis record.
//!
//! Every field is optional and deserialized through [`super::lenient`], so a
//! record object of any shape parses. Defaults are applied later, in one
//! place, by [`super::normalize`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// A named score from a score mapping, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub key: String,
    pub score: f64,
}

impl ScoreEntry {
    /// Create a score entry.
    pub fn new(key: impl Into<String>, score: f64) -> Self {
        Self {
            key: key.into(),
            score,
        }
    }
}

/// Misinformation-risk analysis produced by the external backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisRecord {
    #[serde(default, deserialize_with = "lenient::object")]
    pub risk_assessment: Option<RiskAssessment>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub detailed_analysis: Option<DetailedAnalysis>,
    /// Analysis confidence, 0.0-1.0.
    #[serde(default, deserialize_with = "lenient::number")]
    pub confidence_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RiskAssessment {
    #[serde(default, deserialize_with = "lenient::number")]
    pub overall_risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub risk_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub risk_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::score_map")]
    pub component_scores: Option<Vec<ScoreEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DetailedAnalysis {
    #[serde(default, deserialize_with = "lenient::object")]
    pub temporal: Option<TemporalDetail>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub source: Option<SourceDetail>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub factual: Option<FactualDetail>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub linguistic: Option<LinguisticDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TemporalDetail {
    #[serde(default, deserialize_with = "lenient::number")]
    pub temporal_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub urgency_indicators: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub time_references: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub manipulation_risk: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SourceDetail {
    #[serde(default, deserialize_with = "lenient::number")]
    pub credibility_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub domain_reputation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FactualDetail {
    #[serde(default, deserialize_with = "lenient::number")]
    pub verification_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinguisticDetail {
    #[serde(default, deserialize_with = "lenient::number")]
    pub linguistic_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::score_map")]
    pub pattern_scores: Option<Vec<ScoreEntry>>,
}

impl AnalysisRecord {
    /// Build a record from arbitrary JSON. Never fails: a value that is not
    /// an object yields an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
