//! Input data structures for syllabus topic payloads.
//!
//! These types represent one generation result as handed over by the
//! upstream text generator: a flat list of `Topic` records whose hierarchy
//! is only implied by their names. Field names follow the camelCase JSON
//! the generator emits.

use serde::{Deserialize, Serialize};

use super::lenient::{chapter_tag, lenient_f64, lenient_string, related_topics, string_list};

// ─── RelatedTopic ────────────────────────────────────────────────────────────

/// A cross-reference from one topic to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTopic {
    /// Id of the referenced topic.
    pub topic_id: String,
    /// Free-form relationship label (e.g. "builds upon").
    #[serde(default, deserialize_with = "lenient_string")]
    pub relationship: String,
    /// Nominally in [0, 1]; not enforced on input.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub strength: f64,
}

impl RelatedTopic {
    pub fn new(topic_id: impl Into<String>, relationship: impl Into<String>, strength: f64) -> Self {
        Self {
            topic_id: topic_id.into(),
            relationship: relationship.into(),
            strength,
        }
    }
}

// ─── Topic ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    /// Display name; the numbering prefix encodes the tier
    /// ("Chapter 2: ...", "2.1: ...", "2.1.3: ...").
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared child ids. Carried through but never used for structure.
    #[serde(default, deserialize_with = "string_list")]
    pub children: Vec<String>,
    /// Explicit chapter tag. Generators emit both `"3"` and `3`.
    #[serde(
        default,
        deserialize_with = "chapter_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub chapter: Option<String>,
    /// Malformed entries are dropped one by one.
    #[serde(default, deserialize_with = "related_topics")]
    pub related_topics: Vec<RelatedTopic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Topic {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            children: Vec::new(),
            chapter: None,
            related_topics: Vec::new(),
            completed: None,
        }
    }

    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter = Some(chapter.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_related(mut self, related: RelatedTopic) -> Self {
        self.related_topics.push(related);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
