//! Layout: topic list to positioned roadmap.
//!
//! Pipeline: `hierarchy` groups topics by their numbered names, `engine`
//! assigns coordinates from the resulting shape, and `graph` assembles the
//! nodes and styled edges on a petgraph DiGraph.

pub mod engine;
pub mod graph;
pub mod hierarchy;
pub mod style;
pub mod types;

pub use graph::RoadmapGraph;
pub use hierarchy::Outline;
pub use types::{EdgeKind, EdgeStyle, NodeKind, Point, ROOT_ID, Roadmap, RoadmapEdge, RoadmapNode};

use crate::config::LayoutConfig;
use crate::syntax::Topic;

/// Build a roadmap with the default geometry.
pub fn build_roadmap(topics: &[Topic], title: &str) -> Roadmap {
    build_roadmap_with_config(topics, title, &LayoutConfig::default())
}

/// Build a roadmap with custom geometry.
pub fn build_roadmap_with_config(topics: &[Topic], title: &str, config: &LayoutConfig) -> Roadmap {
    RoadmapGraph::build(topics, title, config).into_roadmap()
}
