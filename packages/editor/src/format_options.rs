//! Secondary controls for version-bearing formats.
//!
//! Formats past their baseline version may write symbolizer sizes in a
//! chosen unit. The unit lives on the parser handle itself, so changing it
//! changes the handle's identity and the editor re-serializes.

use stylesync_common::{ParserHandle, UnitOfMeasure};

/// Version at which a version-bearing format has no extra options
pub const BASELINE_VERSION: &str = "1.0.0";

/// Unit-of-measure control shown next to the format selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub unit_of_measure: UnitOfMeasure,
    pub choices: &'static [UnitOfMeasure],
}

impl FormatOptions {
    /// The control for the active parser, if it has one
    pub fn for_parser(parser: Option<&ParserHandle>) -> Option<Self> {
        let parser = parser?;
        let version = parser.version()?;
        if version == BASELINE_VERSION {
            return None;
        }

        Some(Self {
            unit_of_measure: parser.unit_of_measure(),
            choices: &UnitOfMeasure::ALL,
        })
    }

    pub fn is_available(parser: Option<&ParserHandle>) -> bool {
        Self::for_parser(parser).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use stylesync_common::{ParserOptions, ParserOutput, ParserResult, StyleDocument, StyleParser};

    struct Versioned(Option<&'static str>);

    #[async_trait]
    impl StyleParser for Versioned {
        fn title(&self) -> &str {
            "SLD"
        }

        fn version(&self) -> Option<&str> {
            self.0
        }

        async fn write_style(
            &self,
            _style: &StyleDocument,
            _options: &ParserOptions,
        ) -> ParserResult<ParserOutput<String>> {
            Ok(ParserOutput::ok(String::new()))
        }

        async fn read_style(
            &self,
            _text: &str,
            _options: &ParserOptions,
        ) -> ParserResult<ParserOutput<StyleDocument>> {
            Ok(ParserOutput::failed(["unsupported"]))
        }
    }

    #[test]
    fn test_hidden_without_parser_or_version() {
        assert!(FormatOptions::for_parser(None).is_none());
        let unversioned = ParserHandle::new(Versioned(None));
        assert!(FormatOptions::for_parser(Some(&unversioned)).is_none());
    }

    #[test]
    fn test_hidden_at_baseline_version() {
        let baseline = ParserHandle::new(Versioned(Some("1.0.0")));
        assert!(!FormatOptions::is_available(Some(&baseline)));
    }

    #[test]
    fn test_shown_past_baseline_with_current_unit() {
        let parser = ParserHandle::new(Versioned(Some("1.1.0")));
        parser.set_unit_of_measure(UnitOfMeasure::Metre);

        let options = FormatOptions::for_parser(Some(&parser)).unwrap();
        assert_eq!(options.unit_of_measure, UnitOfMeasure::Metre);
        assert_eq!(options.choices.len(), 3);
    }
}
