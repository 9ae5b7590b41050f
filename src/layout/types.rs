//! Layout types: Point, RoadmapNode, RoadmapEdge, EdgeStyle, Roadmap.
//!
//! These are what the presentation layer consumes; they serialize to the
//! camelCase JSON the web frontend expects.

use serde::{Deserialize, Serialize};

// ─── Constants ────────────────────────────────────────────────────────────────

/// Id of the synthetic course node at the top of every roadmap.
pub const ROOT_ID: &str = "main";

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

// ─── Nodes ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Chapter,
    Section,
    Subsection,
}

impl NodeKind {
    /// Nesting depth below the root.
    pub fn depth(&self) -> usize {
        match self {
            NodeKind::Root => 0,
            NodeKind::Chapter => 1,
            NodeKind::Section => 2,
            NodeKind::Subsection => 3,
        }
    }
}

/// A positioned roadmap node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dotted syllabus number ("2", "2.1", "2.1.3"); `None` for the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Id of the source topic; `None` for the synthetic root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Set on the first section of each chapter.
    #[serde(default)]
    pub highlighted: bool,
}

impl RoadmapNode {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            description: None,
            number: None,
            topic_id: None,
            position,
            completed: None,
            highlighted: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}

// ─── Edges ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Parent tier to child tier.
    Containment,
    /// Chapter to the next chapter in reading order.
    Sequence,
    /// Declared cross-chapter relationship.
    Relationship,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub color: String,
    pub stroke_width: f64,
    pub opacity: f64,
    pub animated: bool,
    /// Draw a closed arrowhead at the target end.
    pub arrow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    /// Visual weight hint; equals `style.stroke_width`.
    pub weight: f64,
    pub style: EdgeStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    /// Raw strength as declared by the topic (not clamped).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl RoadmapEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: EdgeKind,
        style: EdgeStyle,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind,
            weight: style.stroke_width,
            style,
            relationship: None,
            strength: None,
            tooltip: None,
        }
    }
}

// ─── Roadmap ─────────────────────────────────────────────────────────────────

/// The finished node/edge collection handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub title: String,
    pub nodes: Vec<RoadmapNode>,
    pub edges: Vec<RoadmapEdge>,
}

impl Roadmap {
    pub fn node(&self, id: &str) -> Option<&RoadmapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &RoadmapNode> + '_ {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &RoadmapEdge> + '_ {
        self.edges.iter().filter(move |e| e.kind == kind)
    }

    /// Percentage of topic nodes marked completed, rounded; 0 when there
    /// are none.
    pub fn progress(&self) -> u8 {
        let (done, total) = self
            .nodes
            .iter()
            .filter(|n| n.kind != NodeKind::Root)
            .fold((0usize, 0usize), |(done, total), n| {
                (done + usize::from(n.is_completed()), total + 1)
            });
        if total == 0 {
            return 0;
        }
        ((done * 100 + total / 2) / total) as u8
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
