//! Outline renderer: indented text tree with coordinates.
//!
//! ```text
//! Rust Basics @ (400, 0)
//!   1 Getting Started @ (400, 120)
//!     1.1 Install @ (400, 220) *
//!       1.1.1 rustup @ (400, 320)
//!
//! relationships:
//!   chapter-2 -> chapter-1: builds upon (80% strength)
//!
//! progress: 0%
//! ```
//!
//! `*` marks the highlighted first section of a chapter; `[x]` marks a
//! completed topic.

use std::fmt::Write;

use super::Renderer;
use crate::error::Result;
use crate::layout::types::{EdgeKind, Roadmap, RoadmapNode};

#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineRenderer;

fn node_line(node: &RoadmapNode) -> String {
    let indent = "  ".repeat(node.kind.depth());
    let mut line = match &node.number {
        Some(number) => format!("{indent}{number} {}", node.label),
        None => format!("{indent}{}", node.label),
    };
    let _ = write!(line, " @ ({}, {})", node.position.x, node.position.y);
    if node.highlighted {
        line.push_str(" *");
    }
    if node.is_completed() {
        line.push_str(" [x]");
    }
    line
}

impl Renderer for OutlineRenderer {
    fn render(&self, roadmap: &Roadmap) -> Result<String> {
        let mut lines: Vec<String> = roadmap.nodes.iter().map(node_line).collect();

        let relations: Vec<String> = roadmap
            .edges_of_kind(EdgeKind::Relationship)
            .map(|e| {
                let note = e.tooltip.as_deref().unwrap_or("related");
                format!("  {} -> {}: {note}", e.source, e.target)
            })
            .collect();
        if !relations.is_empty() {
            lines.push(String::new());
            lines.push("relationships:".to_string());
            lines.extend(relations);
        }

        lines.push(String::new());
        lines.push(format!("progress: {}%", roadmap.progress()));

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_outline.rs"]
mod tests;
