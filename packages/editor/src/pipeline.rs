//! # Serialization Pipeline
//!
//! Runs one serialize or deserialize under a parser selection.
//!
//! Without a parser the style is written as pretty JSON and text is read
//! back with a plain JSON decode. Parser calls that fail outright and
//! calls that report errors both end up as a [`PipelineError`].

use crate::errors::PipelineError;
use crate::registry::RAW_FORMAT_TITLE;
use crate::view::Language;
use stylesync_common::{ParserHandle, StyleDocument};
use tracing::{debug, instrument};

/// Serialize/deserialize under one parser selection
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    parser: Option<ParserHandle>,
}

impl Pipeline {
    pub fn new(parser: Option<ParserHandle>) -> Self {
        Self { parser }
    }

    /// Pipeline for raw-object mode
    pub fn raw() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        self.parser
            .as_ref()
            .map(|parser| parser.title())
            .unwrap_or(RAW_FORMAT_TITLE)
    }

    pub fn language(&self) -> Language {
        Language::for_parser(self.parser.as_ref())
    }

    /// Write a style as text
    #[instrument(skip_all, fields(format = self.title()))]
    pub async fn serialize(&self, style: &StyleDocument) -> Result<String, PipelineError> {
        let text = match &self.parser {
            None => style.to_pretty_json()?,
            Some(parser) => parser
                .write_style(style)
                .await?
                .into_result()
                .map_err(PipelineError::Reported)?,
        };

        debug!(bytes = text.len(), "Serialized style");
        Ok(text)
    }

    /// Read text back into a style
    #[instrument(skip_all, fields(format = self.title()))]
    pub async fn deserialize(&self, text: &str) -> Result<StyleDocument, PipelineError> {
        let style = match &self.parser {
            None => StyleDocument::from_json(text)?,
            Some(parser) => parser
                .read_style(text)
                .await?
                .into_result()
                .map_err(PipelineError::Reported)?,
        };

        debug!("Deserialized style");
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use stylesync_common::{ParserError, ParserOptions, ParserOutput, ParserResult, StyleParser};

    struct Broken;

    #[async_trait]
    impl StyleParser for Broken {
        fn title(&self) -> &str {
            "Broken"
        }

        fn is_xml(&self) -> bool {
            true
        }

        async fn write_style(
            &self,
            _style: &StyleDocument,
            _options: &ParserOptions,
        ) -> ParserResult<ParserOutput<String>> {
            Err(ParserError::Rejected("no writer".to_string()))
        }

        async fn read_style(
            &self,
            _text: &str,
            _options: &ParserOptions,
        ) -> ParserResult<ParserOutput<StyleDocument>> {
            Ok(ParserOutput::failed(["bad root", "missing rules"]))
        }
    }

    #[tokio::test]
    async fn test_raw_round_trip() {
        let pipeline = Pipeline::raw();
        let style = StyleDocument::new(json!({ "name": "x", "rules": [] }));

        let text = pipeline.serialize(&style).await.unwrap();
        assert_eq!(pipeline.deserialize(&text).await.unwrap(), style);
        assert_eq!(pipeline.title(), RAW_FORMAT_TITLE);
        assert_eq!(pipeline.language(), Language::Json);
    }

    #[tokio::test]
    async fn test_raw_syntax_error_message() {
        let err = Pipeline::raw().deserialize("{ \"name\": ").await.unwrap_err();
        assert!(matches!(err, PipelineError::Parser(ParserError::Json(_))));
        assert!(err.to_string().contains("line 1"));
    }

    #[tokio::test]
    async fn test_parser_failures_become_messages() {
        let pipeline = Pipeline::new(Some(ParserHandle::new(Broken)));
        assert_eq!(pipeline.language(), Language::Xml);

        let write = pipeline.serialize(&StyleDocument::new(json!({}))).await.unwrap_err();
        assert_eq!(write.to_string(), "Parser rejected the request: no writer");

        let read = pipeline.deserialize("<x/>").await.unwrap_err();
        assert_eq!(read.to_string(), "bad root\nmissing rules");
    }
}
