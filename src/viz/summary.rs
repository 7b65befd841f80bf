//! Basic results summary.
//!
//! The summary is built from the top-level fields of an
//! [`AnalysisEnvelope`]: the blended score, red flags, verification steps
//! and tips. When the envelope carries no advanced record, per-type
//! technical detail sections stand in for the dashboard.

use serde::Serialize;

use super::bands::{clamp_score, ColorBandMapper};
use super::theme::ColorToken;
use crate::record::{AnalysisEnvelope, ContentType};

/// Shown in place of an empty red-flag list.
pub const NO_RED_FLAGS: &str = "No significant red flags detected.";

/// Placeholder for a missing detail value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Coarse four-level reading of the blended risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLevel {
    High,
    Moderate,
    Low,
    Minimal,
}

impl SummaryLevel {
    pub fn for_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= 70.0 {
            SummaryLevel::High
        } else if score >= 40.0 {
            SummaryLevel::Moderate
        } else if score >= 20.0 {
            SummaryLevel::Low
        } else {
            SummaryLevel::Minimal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SummaryLevel::High => "HIGH RISK",
            SummaryLevel::Moderate => "MODERATE RISK",
            SummaryLevel::Low => "LOW RISK",
            SummaryLevel::Minimal => "MINIMAL RISK",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SummaryLevel::High => {
                "This content shows multiple indicators of potential misinformation. Exercise extreme caution and verify thoroughly before sharing."
            }
            SummaryLevel::Moderate => {
                "This content has some concerning elements. Consider verifying key claims before sharing."
            }
            SummaryLevel::Low => {
                "Minor concerns detected, but content appears generally credible. Standard verification recommended if sharing widely."
            }
            SummaryLevel::Minimal => {
                "Content appears to have good credibility indicators. However, always practice critical thinking and verify important claims."
            }
        }
    }

    // Yellow sits below orange here, unlike the five-tier risk bands.
    fn token(self) -> ColorToken {
        match self {
            SummaryLevel::High => ColorToken::Danger,
            SummaryLevel::Moderate => ColorToken::Warning,
            SummaryLevel::Low => ColorToken::Orange,
            SummaryLevel::Minimal => ColorToken::Success,
        }
    }
}

/// Conic score circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCircle {
    pub score: f64,
    /// Filled share in percent.
    pub fill: f64,
    pub color: String,
    pub track_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub title: String,
    pub rows: Vec<DetailRow>,
}

impl DetailSection {
    fn new(title: &str, rows: Vec<DetailRow>) -> Self {
        Self {
            title: title.to_string(),
            rows,
        }
    }

    /// Value of the first row with the given label.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub score: ScoreCircle,
    pub level: SummaryLevel,
    pub level_label: String,
    pub level_description: String,
    /// Red flags, or the single no-flags line when there are none.
    pub red_flags: Vec<String>,
    pub has_red_flags: bool,
    pub verification_steps: Vec<String>,
    /// Technical detail sections. Empty when the dashboard is shown instead.
    pub details: Vec<DetailSection>,
    pub educational_tips: Vec<String>,
}

/// Format a number the way it is shown to users: integers without a
/// fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// Missing or zero becomes "N/A".
fn or_na(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format_number(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn or_zero(value: Option<f64>) -> String {
    format_number(value.unwrap_or(0.0))
}

fn text_or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

fn text_details(envelope: &AnalysisEnvelope) -> DetailSection {
    let basic = envelope.analysis.as_ref().and_then(|a| a.basic.as_ref());
    let details = basic.and_then(|b| b.details.as_ref());
    DetailSection::new(
        "Text Analysis Details",
        vec![
            DetailRow::new("Word Count", or_na(basic.and_then(|b| b.word_count))),
            DetailRow::new(
                "Sentiment",
                text_or_na(
                    basic
                        .and_then(|b| b.sentiment.as_ref())
                        .and_then(|s| s.interpretation.as_deref()),
                ),
            ),
            DetailRow::new("Emotional Score", or_zero(details.and_then(|d| d.emotional_manipulation))),
            DetailRow::new("Clickbait Score", or_zero(details.and_then(|d| d.clickbait_patterns))),
            DetailRow::new(
                "Source Reliability Score",
                or_zero(details.and_then(|d| d.source_reliability)),
            ),
        ],
    )
}

fn url_details(envelope: &AnalysisEnvelope) -> DetailSection {
    DetailSection::new(
        "URL Analysis Details",
        vec![
            DetailRow::new("Domain", text_or_na(envelope.domain.as_deref())),
            DetailRow::new("Protocol", text_or_na(envelope.scheme.as_deref())),
            DetailRow::new("Page Title", text_or_na(envelope.title.as_deref())),
            DetailRow::new("External Links", envelope.external_links.to_string()),
            DetailRow::new("Social Signals", envelope.social_signals.to_string()),
        ],
    )
}

fn image_details(envelope: &AnalysisEnvelope) -> Vec<DetailSection> {
    let hash = envelope
        .file_hash
        .as_deref()
        .map(|h| format!("{}...", h.chars().take(16).collect::<String>()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let info = envelope.image_info.as_ref();
    let dimensions = match info {
        Some(info) => format!("{}x{}", or_zero(info.width), or_zero(info.height)),
        None => NOT_AVAILABLE.to_string(),
    };
    let technical = envelope
        .analysis
        .as_ref()
        .and_then(|a| a.technical.as_ref())
        .and_then(|t| t.risk_score);

    let mut sections = vec![DetailSection::new(
        "Image Analysis Details",
        vec![
            DetailRow::new("Filename", text_or_na(envelope.filename.as_deref())),
            DetailRow::new("File Hash", hash),
            DetailRow::new("Format", text_or_na(info.and_then(|i| i.format.as_deref()))),
            DetailRow::new("Dimensions", dimensions),
            DetailRow::new("Technical Score", or_zero(technical)),
        ],
    )];

    if let Some(suggestion) = envelope
        .reverse_search_info
        .as_ref()
        .and_then(|r| r.suggestion.as_deref())
    {
        sections.push(DetailSection::new(
            "Reverse Image Search",
            vec![DetailRow::new("Suggestion", suggestion)],
        ));
    }
    sections
}

fn layer_details(envelope: &AnalysisEnvelope) -> Vec<DetailSection> {
    let mut sections = Vec::new();
    let analysis = envelope.analysis.as_ref();

    if let Some(ai) = analysis.and_then(|a| a.ai.as_ref()) {
        let mut rows = vec![
            DetailRow::new("AI Risk Score", format!("{}/100", or_zero(ai.risk_score))),
            DetailRow::new("Confidence", ai.ai_confidence.as_deref().unwrap_or("Unknown")),
        ];
        if let Some(explanation) = ai.explanation.as_deref() {
            rows.push(DetailRow::new("Explanation", explanation));
        }
        sections.push(DetailSection::new("AI Analysis", rows));
    }

    if let Some(fc) = analysis.and_then(|a| a.fact_checking.as_ref()) {
        let credibility = match fc.overall_credibility {
            Some(v) if v != 0.0 => format!("{}%", format_number(v)),
            _ => NOT_AVAILABLE.to_string(),
        };
        let mut rows = vec![
            DetailRow::new("Overall Credibility", credibility),
            DetailRow::new("Claims Checked", or_zero(fc.total_claims)),
        ];
        for check in envelope.fact_checks() {
            rows.push(DetailRow::new("Claim", check.claim));
            rows.push(DetailRow::new("Verified", if check.verified { "Yes" } else { "No" }));
            let confidence = match check.confidence {
                Some(v) if v != 0.0 => format!("{}%", format_number(v)),
                _ => NOT_AVAILABLE.to_string(),
            };
            rows.push(DetailRow::new("Confidence", confidence));
        }
        sections.push(DetailSection::new("Fact-Check Analysis", rows));
    }

    if let Some(summary) = envelope.processing_summary.as_ref() {
        let time = match summary.total_processing_time {
            Some(secs) if secs != 0.0 => format!("{}ms", (secs * 1000.0).round() as i64),
            _ => NOT_AVAILABLE.to_string(),
        };
        sections.push(DetailSection::new(
            "Processing Summary",
            vec![
                DetailRow::new("Analysis Layers", or_zero(summary.analysis_layers)),
                DetailRow::new("Processing Time", time),
                DetailRow::new("Fact Checks Performed", or_zero(summary.fact_checks_performed)),
            ],
        ));
    }

    sections
}

/// Technical detail sections for an envelope without an advanced record.
pub fn build_details(envelope: &AnalysisEnvelope) -> Vec<DetailSection> {
    let mut sections = match envelope.content_type() {
        ContentType::Text => vec![text_details(envelope)],
        ContentType::Url => vec![url_details(envelope)],
        ContentType::Image => image_details(envelope),
        ContentType::Other => Vec::new(),
    };
    sections.extend(layer_details(envelope));
    sections
}

/// Build the results summary for a backend response.
pub fn build_summary(envelope: &AnalysisEnvelope, mapper: &ColorBandMapper) -> ResultsSummary {
    let score = envelope.risk_score.unwrap_or(0.0);
    let level = SummaryLevel::for_score(score);
    let has_red_flags = !envelope.red_flags.is_empty();
    let red_flags = if has_red_flags {
        envelope.red_flags.clone()
    } else {
        vec![NO_RED_FLAGS.to_string()]
    };
    let details = if envelope.has_advanced() {
        Vec::new()
    } else {
        build_details(envelope)
    };

    ResultsSummary {
        score: ScoreCircle {
            score,
            fill: clamp_score(score),
            color: mapper.color(level.token()),
            track_color: mapper.color(ColorToken::Track),
        },
        level,
        level_label: level.label().to_string(),
        level_description: level.description().to_string(),
        red_flags,
        has_red_flags,
        verification_steps: envelope.verification_suggestions.clone(),
        details,
        educational_tips: envelope.educational_tips.clone(),
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
