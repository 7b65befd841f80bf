//! Render dispatch.
//!
//! A render pass normalizes the record once, then walks an ordered list of
//! [`SectionDescriptor`]s. Each section builds its primitives and draws them
//! onto its named mount point. A missing mount point skips the section and a
//! failing surface fails it; neither stops the pass.

mod primitives;
mod targets;

pub use primitives::*;
pub use targets::*;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::RenderError;
use crate::record::{normalize, AnalysisRecord, NormalizedView};
use crate::viz::{
    build_confidence, build_gauge, build_graph, build_pattern_breakdown, build_radar, build_temporal,
    resolve_confidence, ColorBandMapper, Theme,
};

/// The visual sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// Gauge and component radar.
    Risk,
    Temporal,
    /// Relationship graph.
    Network,
    /// Linguistic pattern bars.
    Sentiment,
    Confidence,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Risk,
        SectionId::Temporal,
        SectionId::Network,
        SectionId::Sentiment,
        SectionId::Confidence,
    ];

    /// Mount point name the section draws onto by default.
    pub fn default_target(self) -> &'static str {
        match self {
            SectionId::Risk => "risk-visualization-section",
            SectionId::Temporal => "timeline-section",
            SectionId::Network => "network-section",
            SectionId::Sentiment => "sentiment-section",
            SectionId::Confidence => "confidence-section",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Risk => "risk",
            SectionId::Temporal => "temporal",
            SectionId::Network => "network",
            SectionId::Sentiment => "sentiment",
            SectionId::Confidence => "confidence",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "risk" => Ok(SectionId::Risk),
            "temporal" | "timeline" => Ok(SectionId::Temporal),
            "network" | "graph" => Ok(SectionId::Network),
            "sentiment" | "pattern" => Ok(SectionId::Sentiment),
            "confidence" => Ok(SectionId::Confidence),
            _ => Err(format!("Unknown section: {}", s)),
        }
    }
}

/// Builds a section's primitives from the normalized view.
pub type SectionBuilder = fn(&NormalizedView, &ColorBandMapper) -> Vec<Primitive>;

/// One entry of the render order.
#[derive(Clone)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub target: String,
    pub build: SectionBuilder,
}

impl std::fmt::Debug for SectionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionDescriptor")
            .field("id", &self.id)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl SectionDescriptor {
    /// Descriptor for a section with its default target and builder.
    pub fn standard(id: SectionId) -> Self {
        let build: SectionBuilder = match id {
            SectionId::Risk => risk_section,
            SectionId::Temporal => temporal_section,
            SectionId::Network => network_section,
            SectionId::Sentiment => sentiment_section,
            SectionId::Confidence => confidence_section,
        };
        Self {
            id,
            target: id.default_target().to_string(),
            build,
        }
    }
}

fn risk_section(view: &NormalizedView, mapper: &ColorBandMapper) -> Vec<Primitive> {
    vec![
        Primitive::Doughnut(build_gauge(view, mapper)),
        Primitive::Radar(build_radar(view)),
    ]
}

fn temporal_section(view: &NormalizedView, _mapper: &ColorBandMapper) -> Vec<Primitive> {
    vec![Primitive::Metrics(build_temporal(view))]
}

fn network_section(view: &NormalizedView, mapper: &ColorBandMapper) -> Vec<Primitive> {
    vec![Primitive::ForceGraph(build_graph(view, mapper))]
}

fn sentiment_section(view: &NormalizedView, mapper: &ColorBandMapper) -> Vec<Primitive> {
    vec![Primitive::Bars(build_pattern_breakdown(view, mapper))]
}

fn confidence_section(view: &NormalizedView, mapper: &ColorBandMapper) -> Vec<Primitive> {
    let confidence = resolve_confidence(view.confidence);
    vec![Primitive::ProgressRing(build_confidence(confidence, mapper))]
}

/// Result of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionStatus {
    Rendered,
    Skipped { reason: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub section: SectionId,
    pub target: String,
    #[serde(flatten)]
    pub status: SectionStatus,
    /// Derived primitives, present whether or not they were drawn.
    pub primitives: Vec<Primitive>,
}

/// Per-section results of a render pass, in render order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutcome {
    pub sections: Vec<SectionReport>,
}

impl RenderOutcome {
    pub fn section(&self, id: SectionId) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.section == id)
    }

    pub fn rendered(&self) -> usize {
        self.count(|status| matches!(status, SectionStatus::Rendered))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, SectionStatus::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, SectionStatus::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&SectionStatus) -> bool) -> usize {
        self.sections.iter().filter(|s| pred(&s.status)).count()
    }
}

/// Drives a render pass over the ordered section list.
#[derive(Debug, Clone)]
pub struct RenderDispatcher {
    mapper: ColorBandMapper,
    sections: Vec<SectionDescriptor>,
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl RenderDispatcher {
    /// Dispatcher with the five standard sections.
    pub fn new(theme: Theme) -> Self {
        Self {
            mapper: ColorBandMapper::new(theme),
            sections: SectionId::ALL.into_iter().map(SectionDescriptor::standard).collect(),
        }
    }

    /// Point a section at a different mount point.
    pub fn with_target(mut self, id: SectionId, target: impl Into<String>) -> Self {
        let target = target.into();
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.target = target;
        }
        self
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn mapper(&self) -> &ColorBandMapper {
        &self.mapper
    }

    /// Render every section of a record onto the given targets.
    pub fn render(&self, record: &AnalysisRecord, targets: &mut RenderTargetSet) -> RenderOutcome {
        let view = normalize(record);
        let mut reports = Vec::with_capacity(self.sections.len());

        for section in &self.sections {
            let primitives = (section.build)(&view, &self.mapper);
            let status = match targets.get_mut(&section.target) {
                None => {
                    let err = RenderError::MissingTarget {
                        section: section.id.to_string(),
                        target: section.target.clone(),
                    };
                    warn!(section = %section.id, target = %section.target, "Render target missing, skipping section");
                    SectionStatus::Skipped {
                        reason: err.to_string(),
                    }
                }
                Some(surface) => match draw_all(surface, &section.target, &primitives) {
                    Ok(()) => {
                        debug!(section = %section.id, primitives = primitives.len(), "Section rendered");
                        SectionStatus::Rendered
                    }
                    Err(err) => {
                        warn!(section = %section.id, error = %err, "Section failed, continuing");
                        SectionStatus::Failed {
                            reason: err.to_string(),
                        }
                    }
                },
            };

            reports.push(SectionReport {
                section: section.id,
                target: section.target.clone(),
                status,
                primitives,
            });
        }

        let outcome = RenderOutcome { sections: reports };
        info!(
            rendered = outcome.rendered(),
            skipped = outcome.skipped(),
            failed = outcome.failed(),
            "Render pass complete"
        );
        outcome
    }
}

fn draw_all(
    surface: &mut dyn RenderSurface,
    target: &str,
    primitives: &[Primitive],
) -> Result<(), RenderError> {
    for primitive in primitives {
        surface.draw(primitive).map_err(|e| RenderError::Surface {
            target: target.to_string(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}
