//! # Parser Capability
//!
//! A parser converts between a [`StyleDocument`] and one textual format.
//! Hosts implement [`StyleParser`] for every format they want to offer; the
//! editor only ever talks to the trait.

use crate::document::StyleDocument;
use crate::options::ParserOptions;
use crate::result::ParserResult;
use async_trait::async_trait;
use std::fmt;

/// One problem a parser found in its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserIssue {
    pub message: String,
}

impl ParserIssue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParserIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<String> for ParserIssue {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for ParserIssue {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Output of a parser call together with the problems it reported
#[derive(Debug, Clone, PartialEq)]
pub struct ParserOutput<T> {
    pub output: Option<T>,
    pub errors: Vec<ParserIssue>,
}

impl<T> ParserOutput<T> {
    pub fn ok(output: T) -> Self {
        Self {
            output: Some(output),
            errors: Vec::new(),
        }
    }

    pub fn failed<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ParserIssue>,
    {
        Self {
            output: None,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// Collapse into the output, or all messages joined by newlines.
    ///
    /// Any reported error fails the call, even when an output came along.
    pub fn into_result(self) -> Result<T, String> {
        if !self.errors.is_empty() {
            return Err(join_issues(&self.errors));
        }

        self.output
            .ok_or_else(|| "Parser returned no output".to_string())
    }
}

/// Join issue messages into the single message shown to the user
pub fn join_issues(issues: &[ParserIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bidirectional converter between style documents and one text format
#[async_trait]
pub trait StyleParser: Send + Sync {
    /// Unique, human-readable name shown in the format selector
    fn title(&self) -> &str;

    /// Format version, for version-bearing formats
    fn version(&self) -> Option<&str> {
        None
    }

    /// Whether the format belongs to the XML family
    fn is_xml(&self) -> bool {
        false
    }

    /// Serialize a style to text
    async fn write_style(
        &self,
        style: &StyleDocument,
        options: &ParserOptions,
    ) -> ParserResult<ParserOutput<String>>;

    /// Deserialize text to a style
    async fn read_style(
        &self,
        text: &str,
        options: &ParserOptions,
    ) -> ParserResult<ParserOutput<StyleDocument>>;
}
