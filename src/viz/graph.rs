//! Relationship graph model.
//!
//! The topology is fixed: a `content` hub joined to the four analysis
//! dimensions plus one `source -> claims` edge. Only the weights come from
//! the record. The graph is handed to an external force-directed layout,
//! together with the [`LayoutHints`] it should run with.

use serde::{Deserialize, Serialize};

use super::bands::ColorBandMapper;
use super::theme::ColorToken;
use crate::record::NormalizedView;

/// Weight used for the hub and for any dimension without a score.
pub const DEFAULT_NODE_WEIGHT: f64 = 50.0;

/// Node identifiers of the fixed topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeId {
    Content,
    Source,
    Claims,
    Language,
    Timing,
}

impl NodeId {
    /// All node ids, in node-list order.
    pub const ALL: [NodeId; 5] = [
        NodeId::Content,
        NodeId::Source,
        NodeId::Claims,
        NodeId::Language,
        NodeId::Timing,
    ];

    /// Display label of the node.
    pub fn label(self) -> &'static str {
        match self {
            NodeId::Content => "Content",
            NodeId::Source => "Source",
            NodeId::Claims => "Claims",
            NodeId::Language => "Language",
            NodeId::Timing => "Timing",
        }
    }

    /// Layout group. The hub is `main`, every other node is its own group.
    pub fn group(self) -> &'static str {
        match self {
            NodeId::Content => "main",
            other => other.as_str(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeId::Content => "content",
            NodeId::Source => "source",
            NodeId::Claims => "claims",
            NodeId::Language => "language",
            NodeId::Timing => "timing",
        }
    }

    fn token(self) -> ColorToken {
        match self {
            NodeId::Content => ColorToken::Primary,
            NodeId::Source => ColorToken::Info,
            NodeId::Claims => ColorToken::Warning,
            NodeId::Language => ColorToken::Secondary,
            NodeId::Timing => ColorToken::Success,
        }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown graph node: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub group: String,
    pub weight: f64,
    pub color: String,
    /// Suggested circle radius, `sqrt(weight) * 2`.
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    /// Suggested stroke width, `sqrt(weight)`.
    pub stroke_width: f64,
}

/// Parameters the force-directed backend is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutHints {
    pub link_distance: f64,
    pub charge_strength: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Default for LayoutHints {
    fn default() -> Self {
        Self {
            link_distance: 100.0,
            charge_strength: -300.0,
            width: 600.0,
            height: 400.0,
            center_x: 300.0,
            center_y: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub layout: LayoutHints,
}

impl RelationshipGraph {
    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

const EDGES: [(NodeId, NodeId, f64); 5] = [
    (NodeId::Content, NodeId::Source, 3.0),
    (NodeId::Content, NodeId::Claims, 4.0),
    (NodeId::Content, NodeId::Language, 2.0),
    (NodeId::Content, NodeId::Timing, 2.0),
    (NodeId::Source, NodeId::Claims, 1.0),
];

// A resolved 0 is indistinguishable from "absent" after normalization and
// falls back to the hub weight.
fn weight_or_default(score: f64) -> f64 {
    if score == 0.0 || score.is_nan() {
        DEFAULT_NODE_WEIGHT
    } else {
        score
    }
}

fn node_weight(id: NodeId, view: &NormalizedView) -> f64 {
    match id {
        NodeId::Content => DEFAULT_NODE_WEIGHT,
        NodeId::Source => weight_or_default(view.source.credibility_score),
        NodeId::Claims => weight_or_default(view.factual.verification_score),
        NodeId::Language => weight_or_default(view.linguistic.linguistic_score),
        NodeId::Timing => weight_or_default(view.temporal.temporal_score),
    }
}

/// Build the relationship graph. Always five nodes and five edges.
pub fn build_graph(view: &NormalizedView, mapper: &ColorBandMapper) -> RelationshipGraph {
    let nodes = NodeId::ALL
        .into_iter()
        .map(|id| {
            let weight = node_weight(id, view);
            GraphNode {
                id,
                label: id.label().to_string(),
                group: id.group().to_string(),
                weight,
                color: mapper.color(id.token()),
                radius: weight.max(0.0).sqrt() * 2.0,
            }
        })
        .collect();

    let edges = EDGES
        .iter()
        .map(|&(source, target, weight)| GraphEdge {
            source,
            target,
            weight,
            stroke_width: weight.sqrt(),
        })
        .collect();

    RelationshipGraph {
        nodes,
        edges,
        layout: LayoutHints::default(),
    }
}
