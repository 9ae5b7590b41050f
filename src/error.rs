//! Error types for roadmap operations.
//!
//! Building a roadmap never fails; these cover the edges around it:
//! reading input, pulling JSON out of model output, and config checks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No JSON object or array found in input")]
    NoJson,

    #[error("Payload has no \"topics\" list")]
    MissingTopics,

    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("Course title is required")]
    MissingTitle,

    #[error("No summary for topic '{0}'")]
    UnknownTopic(String),

    #[error("Unknown output format '{0}'; use json or outline")]
    UnknownFormat(String),
}

/// Result type for roadmap operations.
pub type Result<T> = std::result::Result<T, RoadmapError>;
