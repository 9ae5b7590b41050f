//! Field-level deserializers for generator output.
//!
//! Generators are inconsistent about types (`"3"` vs `3`, `null` vs `[]`)
//! and sometimes emit half-formed nested entries. These helpers accept what
//! they can and fall back to the field's empty value, so one odd field never
//! costs the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use super::types::RelatedTopic;

fn number_of(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Number or numeric string; anything else is 0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(number_of(raw.as_ref()))
}

/// String or number as text; anything else is empty.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(text_of(raw.as_ref()))
}

/// List of strings. A lone string becomes a one-item list; non-string
/// items and non-list values are dropped.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

/// Explicit chapter tag: non-blank string, or a non-negative integer.
pub fn chapter_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => n.as_u64().map(|n| n.to_string()),
        _ => None,
    })
}

/// Related-topic list, one entry at a time. Entries without a string
/// `topicId` are dropped; the rest of the topic is kept either way.
pub fn related_topics<'de, D>(deserializer: D) -> Result<Vec<RelatedTopic>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(entries)) = raw else {
        return Ok(Vec::new());
    };
    Ok(entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let related = entry.as_object().and_then(related_topic);
            if related.is_none() {
                debug!(index, "related topic entry without a topicId dropped");
            }
            related
        })
        .collect())
}

fn related_topic(fields: &Map<String, Value>) -> Option<RelatedTopic> {
    let topic_id = match fields.get("topicId") {
        Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
        _ => return None,
    };
    Some(RelatedTopic {
        topic_id,
        relationship: text_of(fields.get("relationship")),
        strength: number_of(fields.get("strength")),
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_lenient.rs"]
mod tests;
