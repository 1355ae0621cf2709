use crate::error::ParserError;

/// Result of a single serialize/deserialize call
pub type ParserResult<T> = Result<T, ParserError>;
