//! JSON renderer: the node/edge collection as the web frontend reads it.

use super::Renderer;
use crate::error::Result;
use crate::layout::types::Roadmap;

#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, roadmap: &Roadmap) -> Result<String> {
        let mut out = if self.pretty {
            serde_json::to_string_pretty(roadmap)?
        } else {
            serde_json::to_string(roadmap)?
        };
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
