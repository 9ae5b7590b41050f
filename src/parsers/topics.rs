//! Topic list parser.

use serde_json::Value;
use tracing::{debug, warn};

use super::base::{Parser, parse_json_value, payload_entries};
use crate::error::Result;
use crate::syntax::types::Topic;

/// Parses `{"topics": [...]}` (or a bare array) into topic records.
///
/// Records that do not deserialize are skipped one by one; only a payload
/// without any topic list is an error.
pub struct TopicParser;

impl Parser for TopicParser {
    type Output = Vec<Topic>;

    fn parse(&self, src: &str) -> Result<Vec<Topic>> {
        let entries = payload_entries(parse_json_value(src)?, "topics")?;
        let total = entries.len();
        let topics: Vec<Topic> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| topic_from_value(index, entry))
            .collect();
        debug!(total, kept = topics.len(), "parsed topic payload");
        Ok(topics)
    }
}

fn topic_from_value(index: usize, entry: Value) -> Option<Topic> {
    match serde_json::from_value::<Topic>(entry) {
        Ok(topic) => Some(topic),
        Err(e) => {
            warn!(index, error = %e, "skipping malformed topic record");
            None
        }
    }
}
