mod lenient;
pub mod summary;
pub mod types;

pub use summary::{Difficulty, SummarySet, TopicSummary};
pub use types::{RelatedTopic, Topic};
