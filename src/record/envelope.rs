//! Full backend response.
//!
//! The analysis endpoints wrap the advanced record under
//! `analysis.advanced` and add summary fields (overall score, red flags,
//! verification steps, per-type technical details) at the top level.
//! [`AnalysisEnvelope`] parses both the bare record and the wrapped form.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;
use super::types::AnalysisRecord;

/// Kind of content that was analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Url,
    Image,
    Other,
}

impl ContentType {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("text") => ContentType::Text,
            Some("url") => ContentType::Url,
            Some("image") => ContentType::Image,
            _ => ContentType::Other,
        }
    }
}

/// Parsed backend response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisEnvelope {
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub content_type_raw: Option<String>,
    /// Top-level blended risk score (0-100).
    #[serde(default, deserialize_with = "lenient::number")]
    pub risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub red_flags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::steps")]
    pub verification_suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub educational_tips: Vec<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub confidence_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub analysis: Option<AnalysisSections>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub processing_summary: Option<ProcessingSummary>,

    // URL responses
    #[serde(default, deserialize_with = "lenient::string")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub scheme: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::array_len")]
    pub external_links: usize,
    #[serde(default, deserialize_with = "lenient::truthy_count")]
    pub social_signals: usize,

    // Image responses
    #[serde(default, deserialize_with = "lenient::string")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub file_hash: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub image_info: Option<ImageInfo>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub reverse_search_info: Option<ReverseSearchInfo>,

    /// Record used for the advanced dashboard.
    #[serde(skip)]
    record: AnalysisRecord,
    #[serde(skip)]
    advanced: bool,
}

/// Per-layer analysis results nested under `analysis`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisSections {
    /// Kept raw; parsed into an [`AnalysisRecord`] by the envelope.
    #[serde(default)]
    pub advanced: Option<Value>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub basic: Option<BasicAnalysis>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub ai: Option<AiAnalysis>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub fact_checking: Option<FactChecking>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub technical: Option<TechnicalAnalysis>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BasicAnalysis {
    #[serde(default, deserialize_with = "lenient::number")]
    pub word_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub details: Option<BasicDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sentiment {
    #[serde(default, deserialize_with = "lenient::string")]
    pub interpretation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BasicDetails {
    #[serde(default, deserialize_with = "lenient::number")]
    pub emotional_manipulation: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub clickbait_patterns: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub source_reliability: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AiAnalysis {
    #[serde(default, deserialize_with = "lenient::number")]
    pub risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ai_confidence: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FactChecking {
    #[serde(default, deserialize_with = "lenient::number")]
    pub overall_credibility: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_claims: Option<f64>,
    #[serde(default)]
    pub detailed_checks: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TechnicalAnalysis {
    #[serde(default, deserialize_with = "lenient::number")]
    pub risk_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessingSummary {
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_processing_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fact_checks_performed: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub analysis_layers: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReverseSearchInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub suggestion: Option<String>,
}

/// One fact check, already flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FactCheckEntry {
    pub claim: String,
    pub verified: bool,
    pub confidence: Option<f64>,
}

impl AnalysisEnvelope {
    /// Parse a backend response. Never fails.
    ///
    /// When `analysis.advanced` is an object it becomes the dashboard
    /// record, inheriting the top-level `confidence_score` if it has none
    /// of its own. Otherwise the response itself is read as the record.
    pub fn from_value(value: Value) -> Self {
        let mut envelope: AnalysisEnvelope = match &value {
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_default(),
            _ => AnalysisEnvelope::default(),
        };

        let advanced = envelope
            .analysis
            .as_ref()
            .and_then(|a| a.advanced.as_ref())
            .filter(|v| v.is_object())
            .cloned();

        envelope.advanced = advanced.is_some();
        envelope.record = match advanced {
            Some(inner) => {
                let mut record = AnalysisRecord::from_value(inner);
                if record.confidence_score.is_none() {
                    record.confidence_score = envelope.confidence_score;
                }
                record
            }
            None => AnalysisRecord::from_value(value),
        };
        envelope
    }

    /// Record that feeds the visualization models.
    pub fn record(&self) -> &AnalysisRecord {
        &self.record
    }

    /// Whether the response carried an advanced analysis record.
    pub fn has_advanced(&self) -> bool {
        self.advanced
    }

    /// Kind of content the response describes.
    pub fn content_type(&self) -> ContentType {
        ContentType::parse(self.content_type_raw.as_deref())
    }

    /// At most the first three fact checks, flattened.
    pub fn fact_checks(&self) -> Vec<FactCheckEntry> {
        let checks = match self.analysis.as_ref().and_then(|a| a.fact_checking.as_ref()) {
            Some(fc) => &fc.detailed_checks,
            None => return Vec::new(),
        };
        checks
            .iter()
            .take(3)
            .filter_map(|check| {
                let obj = check.as_object()?;
                Some(FactCheckEntry {
                    claim: obj
                        .get("claim")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    verified: obj.get("verified").map(lenient::is_truthy).unwrap_or(false),
                    confidence: obj.get("confidence").and_then(lenient::value_as_f64),
                })
            })
            .collect()
    }
}
