//! WASM bindings for syllabus-roadmap.
//!
//! Exposes `buildRoadmap` and `buildRoadmapWithConfig` to JavaScript via
//! wasm-bindgen. Both return the roadmap as a JSON string.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::renderers::OutputFormat;

fn to_js(e: crate::RoadmapError) -> JsError {
    JsError::new(&e.to_string())
}

/// Build a roadmap from a topic payload with the default geometry.
#[wasm_bindgen(js_name = "buildRoadmap")]
pub fn build_roadmap(src: &str, title: &str) -> Result<String, JsError> {
    crate::render_roadmap(src, title, OutputFormat::Json, &LayoutConfig::default()).map_err(to_js)
}

/// Build a roadmap with geometry overrides.
///
/// `config` is a JSON object with any of the `LayoutConfig` fields in
/// camelCase (`centerX`, `sectionsPerRow`, ...); an empty string means
/// defaults.
#[wasm_bindgen(js_name = "buildRoadmapWithConfig")]
pub fn build_roadmap_with_config(src: &str, title: &str, config: &str) -> Result<String, JsError> {
    let config: LayoutConfig = if config.trim().is_empty() {
        LayoutConfig::default()
    } else {
        serde_json::from_str(config).map_err(|e| to_js(e.into()))?
    };
    crate::render_roadmap(src, title, OutputFormat::Json, &config).map_err(to_js)
}
