//! Confidence progress ring.

use std::f64::consts::PI;

use serde::Serialize;

use super::bands::{clamp_unit, Band, ColorBandMapper, ConfidenceTier};

/// Confidence assumed when the record carries none.
pub const DEFAULT_CONFIDENCE: f64 = 0.7;

/// Radius of the progress ring, in ring units.
pub const RING_RADIUS: f64 = 45.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceIndicator {
    pub confidence: f64,
    /// Rounded percentage shown in the ring.
    pub percentage: u8,
    pub band: Band<ConfidenceTier>,
    pub description: String,
    pub circumference: f64,
    /// Stroke offset leaving `1 - confidence` of the ring empty.
    pub dash_offset: f64,
}

/// Resolve an optional confidence, falling back to [`DEFAULT_CONFIDENCE`].
pub fn resolve_confidence(confidence: Option<f64>) -> f64 {
    confidence.unwrap_or(DEFAULT_CONFIDENCE)
}

/// Build the confidence ring for a confidence in [0, 1].
pub fn build_confidence(confidence: f64, mapper: &ColorBandMapper) -> ConfidenceIndicator {
    let confidence = clamp_unit(confidence);
    let band = mapper.band_for_confidence(confidence);
    let circumference = 2.0 * PI * RING_RADIUS;

    ConfidenceIndicator {
        confidence,
        percentage: (confidence * 100.0).round() as u8,
        description: band.tier.description().to_string(),
        band,
        circumference,
        dash_offset: circumference * (1.0 - confidence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viz::ColorToken;

    #[test]
    fn test_absent_confidence_uses_default() {
        let ring = build_confidence(resolve_confidence(None), &ColorBandMapper::default());
        assert_eq!(ring.confidence, 0.7);
        assert_eq!(ring.percentage, 70);
        assert_eq!(ring.band.tier, ConfidenceTier::Moderate);
        assert_eq!(ring.band.token, ColorToken::Warning);
        assert_eq!(ring.description, "Moderate confidence in analysis results");
    }

    #[test]
    fn test_explicit_zero_is_kept() {
        let ring = build_confidence(resolve_confidence(Some(0.0)), &ColorBandMapper::default());
        assert_eq!(ring.percentage, 0);
        assert_eq!(ring.band.tier, ConfidenceTier::Lower);
        assert!((ring.dash_offset - ring.circumference).abs() < 1e-9);
    }

    #[test]
    fn test_full_confidence_closes_ring() {
        let ring = build_confidence(1.0, &ColorBandMapper::default());
        assert_eq!(ring.percentage, 100);
        assert_eq!(ring.dash_offset, 0.0);
        assert_eq!(ring.band.tier, ConfidenceTier::VeryHigh);
        assert!((ring.circumference - 282.743_338_823_081_4).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(build_confidence(1.7, &ColorBandMapper::default()).confidence, 1.0);
        assert_eq!(build_confidence(-0.2, &ColorBandMapper::default()).confidence, 0.0);
        assert_eq!(build_confidence(f64::NAN, &ColorBandMapper::default()).confidence, 0.0);
    }
}
