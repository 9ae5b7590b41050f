//! syllabus-roadmap: syllabus topic lists to positioned roadmap graphs.
//!
//! Public API: `build_roadmap()`, `roadmap_from_str()`, `render_roadmap()`
//! and `render_summary_text()`.
//!
//! Pipeline: parse (fenced model output → `Topic` records) → outline
//! (numbered names → chapter/section/subsection tree) → layout (tiered
//! coordinates) → graph (nodes + styled edges) → renderer.

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::LayoutConfig;
pub use error::{Result, RoadmapError};
pub use layout::{Roadmap, RoadmapEdge, RoadmapNode, build_roadmap, build_roadmap_with_config};
pub use renderers::{OutputFormat, Renderer};
pub use syntax::{RelatedTopic, Topic, TopicSummary};

/// Parse a topic payload and build its roadmap.
///
/// Fails on an empty title, an invalid config, or input with no usable
/// topic list. Individual malformed topics are skipped, not fatal.
pub fn roadmap_from_str(src: &str, title: &str, config: &LayoutConfig) -> Result<Roadmap> {
    let title = title.trim();
    if title.is_empty() {
        return Err(RoadmapError::MissingTitle);
    }
    config.validate()?;
    let topics = parsers::parse_topics(src)?;
    Ok(build_roadmap_with_config(&topics, title, config))
}

/// Parse, lay out and render in one call.
pub fn render_roadmap(
    src: &str,
    title: &str,
    format: OutputFormat,
    config: &LayoutConfig,
) -> Result<String> {
    let roadmap = roadmap_from_str(src, title, config)?;
    format.renderer().render(&roadmap)
}

/// Parse a summary payload and render one entry as text: the one with id
/// `topic`, or the first entry when `topic` is `None`.
pub fn render_summary_text(src: &str, topic: Option<&str>) -> Result<String> {
    let set = parsers::parse_summaries(src)?;
    let summary = match topic {
        Some(id) => set
            .find(id)
            .ok_or_else(|| RoadmapError::UnknownTopic(id.to_string()))?,
        None => set.primary().ok_or(RoadmapError::MissingTopics)?,
    };
    Ok(renderers::render_summary(summary))
}

#[cfg(test)]
#[path = "../tests/rust/test_api.rs"]
mod tests;
