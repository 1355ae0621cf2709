use thiserror::Error;

/// Failure of a parser call as a whole.
///
/// Format errors found in otherwise successful calls are reported through
/// [`crate::ParserOutput::errors`] instead.
#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Parser rejected the request: {0}")]
    Rejected(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl From<String> for ParserError {
    fn from(s: String) -> Self {
        ParserError::Rejected(s)
    }
}

impl From<&str> for ParserError {
    fn from(s: &str) -> Self {
        ParserError::Rejected(s.to_string())
    }
}
