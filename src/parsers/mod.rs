//! Parser registry: generator payloads in, typed records out.

pub mod base;
pub mod heading;
pub mod summary;
pub mod topics;

pub use base::{Parser, extract_json_block};
pub use heading::{Heading, Tier, classify, parse_chapter_tag};
pub use summary::SummaryParser;
pub use topics::TopicParser;

use crate::error::Result;
use crate::syntax::{SummarySet, Topic};

/// Parse a topic-list payload (raw JSON or a fenced model response).
pub fn parse_topics(src: &str) -> Result<Vec<Topic>> {
    TopicParser.parse(src)
}

/// Parse a topic-summary payload (raw JSON or a fenced model response).
pub fn parse_summaries(src: &str) -> Result<SummarySet> {
    SummaryParser.parse(src)
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_payloads.rs"]
mod tests;
