//! Risk gauge (doughnut) model.

use serde::Serialize;

use super::bands::{clamp_score, Band, ColorBandMapper, RiskTier};
use crate::record::NormalizedView;

/// Caption drawn under the score in the gauge center.
pub const GAUGE_CAPTION: &str = "Risk Score";

/// Share of the doughnut radius cut out of the middle.
pub const GAUGE_CUTOUT_PERCENT: u8 = 70;

/// Single-value risk gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    /// Filled arc, the overall risk score clamped to [0, 100].
    pub filled: f64,
    /// Unfilled arc, `100 - filled`.
    pub remainder: f64,
    pub band: Band<RiskTier>,
    pub level_label: String,
    pub description: String,
    /// Rounded score drawn in the center.
    pub center_text: String,
    pub caption: String,
    /// Color of the unfilled arc.
    pub track_color: String,
    pub cutout_percent: u8,
}

/// Build the risk gauge from a normalized view.
pub fn build_gauge(view: &NormalizedView, mapper: &ColorBandMapper) -> GaugeSpec {
    let filled = clamp_score(view.overall_risk_score);
    GaugeSpec {
        filled,
        remainder: 100.0 - filled,
        band: mapper.band_for_risk_score(filled),
        level_label: view.risk_level.clone(),
        description: view.risk_description.clone(),
        center_text: format!("{}", filled.round() as i64),
        caption: GAUGE_CAPTION.to_string(),
        track_color: mapper.color(super::ColorToken::Track),
        cutout_percent: GAUGE_CUTOUT_PERCENT,
    }
}
