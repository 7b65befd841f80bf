//! Temporal / urgency panel model.

use serde::Serialize;

use crate::record::NormalizedView;

/// Three urgency metrics shown side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalPanel {
    pub urgency_indicators: f64,
    pub time_references: f64,
    pub manipulation_risk: String,
    /// Style class keyed on the manipulation risk, e.g. `risk-level-high`.
    pub risk_class: String,
}

/// Build the temporal panel from a normalized view.
pub fn build_temporal(view: &NormalizedView) -> TemporalPanel {
    let temporal = &view.temporal;
    TemporalPanel {
        urgency_indicators: temporal.urgency_indicators,
        time_references: temporal.time_references,
        manipulation_risk: temporal.manipulation_risk.clone(),
        risk_class: risk_class(&temporal.manipulation_risk),
    }
}

/// `risk-level-<value>`, lowercased with whitespace runs collapsed to `-`.
pub fn risk_class(manipulation_risk: &str) -> String {
    let slug = manipulation_risk
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "risk-level-unknown".to_string()
    } else {
        format!("risk-level-{}", slug)
    }
}
