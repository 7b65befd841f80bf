//! Drag interaction as messages.
//!
//! The force layout emits [`LayoutEvent`]s while the user drags a node.
//! [`NodePins`] folds them into the set of pinned positions. The graph model
//! itself is never touched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::graph::NodeId;

/// A position in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Event emitted by the layout backend during drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LayoutEvent {
    /// Drag began; the node is pinned where it currently sits.
    DragStart { node: NodeId, at: Point },
    /// The node moved under the pointer.
    Drag { node: NodeId, at: Point },
    /// Drag ended; the node is released back to the simulation.
    DragEnd { node: NodeId },
}

impl LayoutEvent {
    pub fn node(&self) -> NodeId {
        match *self {
            LayoutEvent::DragStart { node, .. }
            | LayoutEvent::Drag { node, .. }
            | LayoutEvent::DragEnd { node } => node,
        }
    }
}

/// Fixed positions of nodes currently held by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodePins {
    pins: BTreeMap<NodeId, Point>,
}

impl NodePins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    pub fn apply(&mut self, event: LayoutEvent) {
        match event {
            LayoutEvent::DragStart { node, at } | LayoutEvent::Drag { node, at } => {
                self.pins.insert(node, at);
            }
            LayoutEvent::DragEnd { node } => {
                self.pins.remove(&node);
            }
        }
    }

    /// Apply a stream of events in order.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = LayoutEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Pinned position of a node, if it is held.
    pub fn get(&self, node: NodeId) -> Option<Point> {
        self.pins.get(&node).copied()
    }

    pub fn is_pinned(&self, node: NodeId) -> bool {
        self.pins.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_pins_then_releases() {
        let mut pins = NodePins::new();
        pins.apply(LayoutEvent::DragStart {
            node: NodeId::Source,
            at: Point::new(10.0, 20.0),
        });
        assert_eq!(pins.get(NodeId::Source), Some(Point::new(10.0, 20.0)));

        pins.apply(LayoutEvent::Drag {
            node: NodeId::Source,
            at: Point::new(42.0, 7.5),
        });
        assert_eq!(pins.get(NodeId::Source), Some(Point::new(42.0, 7.5)));

        pins.apply(LayoutEvent::DragEnd { node: NodeId::Source });
        assert!(!pins.is_pinned(NodeId::Source));
        assert!(pins.is_empty());
    }

    #[test]
    fn test_independent_nodes() {
        let mut pins = NodePins::new();
        pins.apply_all([
            LayoutEvent::DragStart {
                node: NodeId::Claims,
                at: Point::new(1.0, 1.0),
            },
            LayoutEvent::DragStart {
                node: NodeId::Timing,
                at: Point::new(2.0, 2.0),
            },
            LayoutEvent::DragEnd { node: NodeId::Claims },
        ]);
        assert_eq!(pins.len(), 1);
        assert!(pins.is_pinned(NodeId::Timing));
    }

    #[test]
    fn test_drag_end_without_start_is_noop() {
        let mut pins = NodePins::new();
        pins.apply(LayoutEvent::DragEnd { node: NodeId::Content });
        assert!(pins.is_empty());
    }

    #[test]
    fn test_event_deserializes_from_backend_message() {
        let event: LayoutEvent =
            serde_json::from_str(r#"{"event":"drag","node":"language","at":{"x":3.0,"y":4.0}}"#).unwrap();
        assert_eq!(event.node(), NodeId::Language);
        assert_eq!(
            event,
            LayoutEvent::Drag {
                node: NodeId::Language,
                at: Point::new(3.0, 4.0)
            }
        );
    }
}
