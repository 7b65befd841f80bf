//! Backend-neutral drawing primitives.

use serde::Serialize;

use crate::viz::{
    ConfidenceIndicator, GaugeSpec, PatternIndicator, RadarSpec, RelationshipGraph, TemporalPanel,
};

/// One unit of work for a rendering backend.
///
/// Chart-like primitives map onto a generic chart abstraction (doughnut,
/// radar, progress ring); `ForceGraph` goes to a force-directed layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Primitive {
    Doughnut(GaugeSpec),
    Radar(RadarSpec),
    Metrics(TemporalPanel),
    ForceGraph(RelationshipGraph),
    Bars(Vec<PatternIndicator>),
    ProgressRing(ConfidenceIndicator),
}

impl Primitive {
    /// Short kind name, matching the serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Doughnut(_) => "doughnut",
            Primitive::Radar(_) => "radar",
            Primitive::Metrics(_) => "metrics",
            Primitive::ForceGraph(_) => "force_graph",
            Primitive::Bars(_) => "bars",
            Primitive::ProgressRing(_) => "progress_ring",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{normalize, AnalysisRecord};
    use crate::viz::{build_confidence, build_temporal, ColorBandMapper};

    #[test]
    fn test_serialized_tag_matches_kind() {
        let view = normalize(&AnalysisRecord::default());
        let primitives = [
            Primitive::Metrics(build_temporal(&view)),
            Primitive::ProgressRing(build_confidence(0.5, &ColorBandMapper::default())),
            Primitive::Bars(Vec::new()),
        ];
        for primitive in primitives {
            let value = serde_json::to_value(&primitive).unwrap();
            assert_eq!(value["kind"], primitive.kind());
            assert!(value.get("data").is_some());
        }
    }
}
