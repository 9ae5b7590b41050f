//! Renderer registry and Renderer trait.

pub mod json;
pub mod outline;
pub mod summary;

pub use json::JsonRenderer;
pub use outline::OutlineRenderer;
pub use summary::render_summary;

use crate::error::{Result, RoadmapError};
use crate::layout::types::Roadmap;

/// Trait for roadmap renderers.
pub trait Renderer {
    /// Render a positioned roadmap to a string.
    fn render(&self, roadmap: &Roadmap) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Outline,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "outline" | "text" => Ok(OutputFormat::Outline),
            _ => Err(RoadmapError::UnknownFormat(name.to_string())),
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Json => Box::new(JsonRenderer::default()),
            OutputFormat::Outline => Box::new(OutlineRenderer),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_format.rs"]
mod tests;
