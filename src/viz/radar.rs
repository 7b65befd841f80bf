//! Credibility component radar model.

use serde::Serialize;

use crate::record::NormalizedView;

/// Label of the single radar dataset.
pub const RADAR_DATASET_LABEL: &str = "Credibility Scores";

/// Fixed radial scale of the radar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for RadarScale {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 20.0,
        }
    }
}

/// Multi-axis score set. Axis order follows the component-score mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSpec {
    pub axis_labels: Vec<String>,
    /// Raw component scores; the scale, not the model, bounds them.
    pub axis_values: Vec<f64>,
    pub dataset_label: String,
    pub scale: RadarScale,
}

impl RadarSpec {
    /// True when there are no axes to draw.
    pub fn is_empty(&self) -> bool {
        self.axis_labels.is_empty()
    }
}

/// Upper-case the first character of a key, leaving the rest untouched.
pub fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the component radar from a normalized view.
pub fn build_radar(view: &NormalizedView) -> RadarSpec {
    let (axis_labels, axis_values) = view
        .component_scores
        .iter()
        .map(|entry| (title_case(&entry.key), entry.score))
        .unzip();

    RadarSpec {
        axis_labels,
        axis_values,
        dataset_label: RADAR_DATASET_LABEL.to_string(),
        scale: RadarScale::default(),
    }
}
