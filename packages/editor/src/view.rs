//! Snapshot of what the editor shows.

use crate::format_options::FormatOptions;
use stylesync_common::ParserHandle;

/// Syntax hint handed to the text surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Json,
    Xml,
}

impl Language {
    pub fn for_parser(parser: Option<&ParserHandle>) -> Self {
        match parser {
            Some(parser) if parser.is_xml() => Language::Xml,
            _ => Language::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Json => "json",
            Language::Xml => "xml",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Language::Json => "application/json;charset=utf-8",
            Language::Xml => "text/xml;charset=utf-8",
        }
    }
}

/// How far the text buffer agrees with the host's style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationState {
    /// Text is the serialization of the style
    #[default]
    Clean,

    /// User text not yet accepted, with the last read error if there was one
    PendingUserEdit(Option<String>),

    /// The style could not be written in the active format
    SerializationFailed(String),
}

/// Everything a host needs to render the editor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorView {
    pub text: String,
    pub language: Language,
    pub validation: ValidationState,
    /// Title of the active parser; `None` in raw-object mode
    pub active_parser: Option<String>,
    pub format_options: Option<FormatOptions>,
    pub style_name: Option<String>,
    pub show_save: bool,
    pub show_copy: bool,
}

impl EditorView {
    /// Whether the editor is replaced by a fault indicator
    pub fn is_faulted(&self) -> bool {
        matches!(self.validation, ValidationState::SerializationFailed(_))
    }

    pub fn fault_message(&self) -> Option<&str> {
        match &self.validation {
            ValidationState::SerializationFailed(message) => Some(message),
            _ => None,
        }
    }

    /// Inline message shown under the text surface
    pub fn inline_message(&self) -> Option<&str> {
        match &self.validation {
            ValidationState::PendingUserEdit(Some(message)) => Some(message),
            _ => None,
        }
    }
}
