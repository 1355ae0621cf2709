//! # Parser Registry
//!
//! Ordered set of the parsers a host offers, plus the raw-object mode.
//!
//! Selecting the raw-object title, or any title that is not registered,
//! yields no parser: the editor then shows the style as plain JSON.

use stylesync_common::ParserHandle;
use thiserror::Error;
use tracing::warn;

/// Selector title of the raw-object (no parser) mode
pub const RAW_FORMAT_TITLE: &str = "Style Object";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("A parser titled '{0}' is already registered")]
    DuplicateTitle(String),
}

/// Entry of the format selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserChoice {
    pub title: String,
    pub is_raw: bool,
}

/// Registry of the parsers available to an editor
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: Vec<ParserHandle>,
}

impl ParserRegistry {
    /// Create an empty registry (raw-object mode only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, keeping the supplied order
    pub fn from_parsers<I>(parsers: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ParserHandle>,
    {
        let mut registry = Self::new();
        for parser in parsers {
            registry.register(parser)?;
        }
        Ok(registry)
    }

    /// Add a parser. Titles must be unique, and may not shadow the raw mode.
    pub fn register(&mut self, parser: ParserHandle) -> Result<(), RegistryError> {
        let title = parser.title();
        if title == RAW_FORMAT_TITLE || self.get(title).is_some() {
            return Err(RegistryError::DuplicateTitle(title.to_string()));
        }

        self.parsers.push(parser);
        Ok(())
    }

    /// Get all registered parsers
    pub fn parsers(&self) -> &[ParserHandle] {
        &self.parsers
    }

    pub fn get(&self, title: &str) -> Option<&ParserHandle> {
        self.parsers.iter().find(|parser| parser.title() == title)
    }

    /// Resolve a selector title to a parser
    pub fn select(&self, title: &str) -> Option<ParserHandle> {
        if title == RAW_FORMAT_TITLE {
            return None;
        }

        let parser = self.get(title).cloned();
        if parser.is_none() {
            warn!(title, "Unknown parser selected, falling back to raw style object");
        }
        parser
    }

    /// Selector entries: raw-object mode first, then parsers in order
    pub fn choices(&self) -> Vec<ParserChoice> {
        std::iter::once(ParserChoice {
            title: RAW_FORMAT_TITLE.to_string(),
            is_raw: true,
        })
        .chain(self.parsers.iter().map(|parser| ParserChoice {
            title: parser.title().to_string(),
            is_raw: false,
        }))
        .collect()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &format!("{} parsers", self.parsers.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use stylesync_common::{ParserOptions, ParserOutput, ParserResult, StyleDocument, StyleParser};

    struct Named(&'static str);

    #[async_trait]
    impl StyleParser for Named {
        fn title(&self) -> &str {
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

    fn registry(titles: &[&'static str]) -> ParserRegistry {
        ParserRegistry::from_parsers(titles.iter().map(|t| ParserHandle::new(Named(*t)))).unwrap()
    }

    #[test]
    fn test_choices_list_raw_mode_first() {
        let registry = registry(&["SLD", "Mapbox"]);
        let titles: Vec<_> = registry.choices().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec![RAW_FORMAT_TITLE, "SLD", "Mapbox"]);
        assert!(registry.choices()[0].is_raw);
    }

    #[test]
    fn test_select_resolves_registered_instance() {
        let registry = registry(&["SLD", "Mapbox"]);
        let selected = registry.select("Mapbox").unwrap();
        assert!(selected.same_instance(&registry.parsers()[1]));
    }

    #[test]
    fn test_select_raw_and_unknown_give_none() {
        let registry = registry(&["SLD"]);
        assert!(registry.select(RAW_FORMAT_TITLE).is_none());
        assert!(registry.select("QML").is_none());
    }

    #[test]
    fn test_duplicate_titles_are_rejected() {
        let result = ParserRegistry::from_parsers(vec![
            ParserHandle::new(Named("SLD")),
            ParserHandle::new(Named("SLD")),
        ]);
        assert_eq!(result.unwrap_err(), RegistryError::DuplicateTitle("SLD".to_string()));

        let mut registry = ParserRegistry::new();
        assert!(registry.register(ParserHandle::new(Named(RAW_FORMAT_TITLE))).is_err());
        assert!(registry.is_empty());
    }
}
