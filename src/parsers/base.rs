//! Parser trait definition and shared JSON extraction helpers.
//!
//! Generators wrap their JSON in markdown fences or surround it with prose,
//! so every payload parser first narrows the text down to one JSON value.

use serde_json::Value;

use crate::error::{Result, RoadmapError};

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for generator payload parsers.
///
/// Each payload kind (topic list, topic summaries) implements this trait.
pub trait Parser {
    type Output;

    /// Parse raw generator output into a typed payload.
    fn parse(&self, src: &str) -> Result<Self::Output>;
}

// ─── JSON extraction ─────────────────────────────────────────────────────────

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Narrow generator output down to the JSON text it carries.
///
/// Order of preference: the body of a ```` ```json ```` fence, the body of the
/// first plain fence, the whole text. If what remains does not start with a
/// JSON container, the outermost `{...}` / `[...]` span is used instead.
pub fn extract_json_block(text: &str) -> &str {
    let body = if let Some((_, rest)) = text.split_once(JSON_FENCE) {
        rest.split_once(FENCE).map_or(rest, |(inner, _)| inner)
    } else if let Some((_, rest)) = text.split_once(FENCE) {
        rest.split_once(FENCE).map_or(rest, |(inner, _)| inner)
    } else {
        text
    };
    let body = body.trim();
    if body.starts_with('{') || body.starts_with('[') {
        return body;
    }
    outermost_container(body).unwrap_or(body)
}

fn outermost_container(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let close = if text[start..].starts_with('{') { '}' } else { ']' };
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

/// Parse `src` as JSON after running it through [`extract_json_block`].
pub fn parse_json_value(src: &str) -> Result<Value> {
    let block = extract_json_block(src);
    if !(block.starts_with('{') || block.starts_with('[')) {
        return Err(RoadmapError::NoJson);
    }
    Ok(serde_json::from_str(block)?)
}

/// Pull the record list out of a payload: either `{"<key>": [...]}` or a
/// bare top-level array.
pub fn payload_entries(value: Value, key: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Err(RoadmapError::MissingTopics),
        },
        _ => Err(RoadmapError::MissingTopics),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
