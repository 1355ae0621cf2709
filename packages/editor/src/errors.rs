//! Error types for the editor

use stylesync_common::ParserError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Registry error: {0}")]
    Registry(#[from] crate::registry::RegistryError),

    #[error("Edit session is closed")]
    SessionClosed,

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EditorResult<T> = Result<T, EditorError>;

/// Failure of a serialize or deserialize run.
///
/// The display text is what ends up in the validation state.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Parser(#[from] ParserError),

    #[error("{0}")]
    Reported(String),
}
