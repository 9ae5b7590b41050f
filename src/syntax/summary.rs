//! Topic summary payloads (the per-topic "View Summary" popup data).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient::{lenient_string, string_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "Beginner")]
    Beginner,
    #[serde(alias = "Intermediate")]
    Intermediate,
    #[serde(alias = "Advanced")]
    Advanced,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicSummary {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(deserialize_with = "string_list")]
    pub key_points: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub learning_objectives: Vec<String>,
    #[serde(deserialize_with = "lenient_difficulty")]
    pub difficulty: Difficulty,
    #[serde(deserialize_with = "lenient_string")]
    pub estimated_study_time: String,
}

/// Known level names in either case; anything else is `Unknown`.
fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Difficulty, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(level @ Value::String(_)) => serde_json::from_value(level).unwrap_or_default(),
        _ => Difficulty::Unknown,
    })
}

/// Summaries from one generation result, in payload order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummarySet {
    pub topics: Vec<TopicSummary>,
}

impl SummarySet {
    pub fn new(topics: Vec<TopicSummary>) -> Self {
        Self { topics }
    }

    /// The entry a single-topic popup shows: the first one.
    pub fn primary(&self) -> Option<&TopicSummary> {
        self.topics.first()
    }

    pub fn find(&self, id: &str) -> Option<&TopicSummary> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_summary.rs"]
mod tests;
