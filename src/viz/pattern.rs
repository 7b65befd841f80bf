//! Linguistic pattern breakdown.

use serde::Serialize;

use super::bands::{clamp_score, Band, ColorBandMapper, PatternTier};
use crate::record::NormalizedView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternIndicator {
    /// Display name: the key with its first underscore replaced by a space.
    pub name: String,
    pub score: f64,
    /// Bar fill in percent, the score clamped to [0, 100].
    pub fill: f64,
    pub band: Band<PatternTier>,
}

/// Replace the first underscore of a pattern key with a space.
///
/// `emotional_manipulation_score` becomes `emotional manipulation_score`.
pub fn display_name(key: &str) -> String {
    key.replacen('_', " ", 1)
}

/// Replace every underscore of a pattern key with a space.
pub fn display_name_full(key: &str) -> String {
    key.replace('_', " ")
}

/// One indicator per pattern key, in mapping order.
pub fn build_pattern_breakdown(view: &NormalizedView, mapper: &ColorBandMapper) -> Vec<PatternIndicator> {
    view.pattern_scores
        .iter()
        .map(|entry| PatternIndicator {
            name: display_name(&entry.key),
            score: entry.score,
            fill: clamp_score(entry.score),
            band: mapper.band_for_pattern_score(entry.score),
        })
        .collect()
}
