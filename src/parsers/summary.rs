//! Topic summary parser.

use tracing::warn;

use super::base::{Parser, parse_json_value, payload_entries};
use crate::error::Result;
use crate::syntax::summary::{SummarySet, TopicSummary};

pub struct SummaryParser;

impl Parser for SummaryParser {
    type Output = SummarySet;

    fn parse(&self, src: &str) -> Result<SummarySet> {
        let entries = payload_entries(parse_json_value(src)?, "topics")?;
        let topics = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                serde_json::from_value::<TopicSummary>(entry)
                    .map_err(|e| warn!(index, error = %e, "skipping malformed summary record"))
                    .ok()
            })
            .collect();
        Ok(SummarySet::new(topics))
    }
}
