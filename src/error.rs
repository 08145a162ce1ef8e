//! Error types for the non-search call paths.

use crate::model::SourceTag;

/// Failures surfaced by a single upstream source.
///
/// Search-path failures are folded into `SourceSearchResult::error` instead
/// of being raised; this enum covers the paths that do return `Result`
/// (single-ad lookup, typeahead internals, input validation).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{message}")]
    Status { code: u16, message: String },

    #[error("{} error: {message}", .source_tag.api_label())]
    Upstream {
        source_tag: SourceTag,
        message: String,
    },
}

impl SourceError {
    pub fn upstream(source_tag: SourceTag, message: impl Into<String>) -> Self {
        SourceError::Upstream {
            source_tag,
            message: message.into(),
        }
    }

    /// Stable machine-readable code for callers that key behavior off the
    /// failure class rather than the message text.
    pub fn code_str(&self) -> &'static str {
        match self {
            SourceError::InvalidInput(_) => "invalid_input",
            SourceError::Http(_) => "transport_error",
            SourceError::Json(_) => "parse_error",
            SourceError::Status { .. } => "upstream_status",
            SourceError::Upstream { .. } => "upstream_error",
        }
    }

    /// HTTP status carried by the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Map an upstream HTTP status to the fixed human-readable message shown to
/// callers. The `id` is interpolated into the 404 message when available.
pub(crate) fn status_message(status: u16, id: Option<&str>) -> String {
    match status {
        400 => "Bad Request: Something is wrong with the query parameters".to_string(),
        404 => match id {
            Some(id) => format!("Missing Ad: The requested ad with ID {id} is not available"),
            None => "Resource not found".to_string(),
        },
        429 => {
            "Rate limit exceeded: You have sent too many requests in a given amount of time"
                .to_string()
        }
        500 => "Internal Server Error: Server-side issue".to_string(),
        other => format!("HTTP Error: {other}"),
    }
}
