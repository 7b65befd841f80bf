//! Data types for demo scenarios.

use serde::{Deserialize, Serialize};

/// A canned input with the risk score it is expected to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoScenario {
    /// Unique scenario identifier (e.g., "covid_myth").
    pub id: String,
    /// Human-readable category shown in the demo banner.
    pub category: String,
    /// Text pre-filled into the analysis input.
    pub text: String,
    /// Risk score the scenario is expected to reach, 0-100.
    pub expected_risk: u8,
}

impl DemoScenario {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        expected_risk: u8,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            text: text.into(),
            expected_risk,
        }
    }

    pub fn to_summary(&self) -> DemoSummary {
        DemoSummary {
            id: self.id.clone(),
            category: self.category.clone(),
            expected_risk: self.expected_risk,
            preview: preview(&self.text, 60),
        }
    }
}

/// Listing entry for a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoSummary {
    pub id: String,
    pub category: String,
    pub expected_risk: u8,
    /// Start of the scenario text.
    pub preview: String,
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head.trim_end())
    }
}
