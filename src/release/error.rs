use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Ambiguous stability: found {candidates:?}")]
    AmbiguousStability { candidates: Vec<String> },

    #[error("Ambiguous version number: found {candidates:?}")]
    AmbiguousVersionNumber { candidates: Vec<String> },

    #[error("No version number found")]
    NoVersionFound,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to read feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid feed: {0}")]
    Json(#[from] serde_json::Error),
}
