//! # Stylesync Editor
//!
//! Keeps a style document and its text form in sync while the user edits
//! the text in any of the formats the host plugs in.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host: style document + parsers + callback   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Registry resolves the selected format    │
//! │  - Controller reconciles style/parser/text  │
//! │  - Debouncer turns keystrokes into commits  │
//! │  - Pipeline runs serialize / deserialize    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ view: text, language, validation, options   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Host owns the style**: the editor only reports committed edits
//! 2. **Host wins races**: an external change discards uncommitted text
//! 3. **Latest request wins**: stale async results are dropped, never applied
//! 4. **Bad input stays local**: unparsable text is kept and flagged inline
//! 5. **Bad styles fail loudly**: a style the format cannot write faults the view
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stylesync_editor::{EditSession, EditorConfig, ParserRegistry};
//!
//! let registry = ParserRegistry::from_parsers([ParserHandle::new(SldParser::default())])?;
//! let session = EditSession::spawn(style, registry, &EditorConfig::default(), |style| {
//!     println!("committed {:?}", style.name());
//! });
//!
//! session.select_parser("SLD")?;
//! session.user_edit("<StyledLayerDescriptor ...")?;
//!
//! let view = session.view();
//! ```

mod actions;
mod config;
mod controller;
mod debounce;
mod errors;
mod format_options;
mod pipeline;
mod registry;
mod session;
mod view;

pub use actions::{copy_text, Download, DEFAULT_FILE_STEM};
pub use config::{EditorConfig, DEFAULT_CONFIG_NAME, DEFAULT_DEBOUNCE_MS};
pub use controller::StyleChangeCallback;
pub use debounce::Debouncer;
pub use errors::{EditorError, EditorResult, PipelineError};
pub use format_options::{FormatOptions, BASELINE_VERSION};
pub use pipeline::Pipeline;
pub use registry::{ParserChoice, ParserRegistry, RegistryError, RAW_FORMAT_TITLE};
pub use session::EditSession;
pub use view::{EditorView, Language, ValidationState};

// Re-export common types for convenience
pub use stylesync_common::{
    ParserError, ParserHandle, ParserIdentity, ParserIssue, ParserOptions, ParserOutput,
    ParserResult, StyleDocument, StyleParser, UnitOfMeasure,
};
