use thiserror::Error;

/// Errors raised by the layers around the extraction engine.
///
/// Projection and selector matching never fail; they degrade to empty output.
/// Everything that reads configuration or external payloads reports through here.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid course catalog: {0}")]
    Catalog(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Invalid scrape response: {0}")]
    InvalidResponse(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid parameters for tool '{tool}': {reason}")]
    InvalidParams { tool: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ExtractError>;
