//! Download and copy helpers.
//!
//! Both work on the text the editor already shows. Writing the bytes to a
//! file or to the clipboard is up to the host.

use crate::view::EditorView;

/// File stem used when the style has no name
pub const DEFAULT_FILE_STEM: &str = "style";

/// A file the host should offer for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl Download {
    /// Build the download for a view; nothing to save while faulted
    pub fn from_view(view: &EditorView) -> Option<Self> {
        if view.is_faulted() {
            return None;
        }

        let stem = view.style_name.as_deref().unwrap_or(DEFAULT_FILE_STEM);
        Some(Self {
            file_name: format!("{}.{}", stem, view.language.extension()),
            mime_type: view.language.mime_type(),
            contents: view.text.clone(),
        })
    }
}

/// Text to put on the clipboard
pub fn copy_text(view: &EditorView) -> Option<String> {
    (!view.is_faulted()).then(|| view.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Language, ValidationState};

    fn view(name: Option<&str>, language: Language) -> EditorView {
        EditorView {
            text: "body".to_string(),
            language,
            style_name: name.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_file_name_from_style_name_and_format() {
        let download = Download::from_view(&view(Some("Roads"), Language::Xml)).unwrap();
        assert_eq!(download.file_name, "Roads.xml");
        assert_eq!(download.mime_type, "text/xml;charset=utf-8");
        assert_eq!(download.contents, "body");

        let download = Download::from_view(&view(Some("Roads"), Language::Json)).unwrap();
        assert_eq!(download.file_name, "Roads.json");
    }

    #[test]
    fn test_unnamed_style_uses_default_stem() {
        let download = Download::from_view(&view(None, Language::Json)).unwrap();
        assert_eq!(download.file_name, "style.json");
    }

    #[test]
    fn test_nothing_to_save_or_copy_while_faulted() {
        let mut faulted = view(Some("Roads"), Language::Json);
        faulted.validation = ValidationState::SerializationFailed("boom".to_string());

        assert!(Download::from_view(&faulted).is_none());
        assert!(copy_text(&faulted).is_none());
    }

    #[test]
    fn test_copy_keeps_pending_user_text() {
        let mut editing = view(None, Language::Json);
        editing.text = "{ not json".to_string();
        editing.validation = ValidationState::PendingUserEdit(Some("syntax".to_string()));

        assert_eq!(copy_text(&editing).as_deref(), Some("{ not json"));
    }
}
