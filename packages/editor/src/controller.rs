//! # Synchronization Controller
//!
//! Reconciles three sources of truth into one text buffer:
//!
//! ```text
//!  host style ──┐
//!               ├─► reconcile ─► serialize ─► text buffer ◄─ user edits
//!  parser pick ─┘                                  │
//!                                   debounce ─► commit ─► deserialize ─► host
//! ```
//!
//! The controller handles one [`EditorEvent`] at a time. Parser calls run on
//! spawned tasks and report back as events stamped with the state they were
//! started from:
//!
//! - serialize results carry a generation; only the latest one is applied
//! - deserialize results carry an edit epoch; any edit or external change
//!   after the commit started makes the result stale
//! - debounced commits carry a [`Debouncer`] ticket
//!
//! External changes win over local edits: accepting one cancels the pending
//! commit, and its serialize result overwrites the buffer.

use crate::debounce::Debouncer;
use crate::format_options::FormatOptions;
use crate::pipeline::Pipeline;
use crate::registry::ParserRegistry;
use crate::view::{EditorView, Language, ValidationState};
use crate::EditorConfig;
use std::ops::ControlFlow;
use std::sync::Arc;
use stylesync_common::{ParserHandle, ParserIdentity, StyleDocument, UnitOfMeasure};
use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument, warn};

/// Host callback receiving every successfully committed style
pub type StyleChangeCallback = Arc<dyn Fn(StyleDocument) + Send + Sync>;

/// Input to the controller
#[derive(Debug)]
pub(crate) enum EditorEvent {
    /// Host replaced its style
    SetStyle(StyleDocument),

    /// User picked an entry of the format selector
    SelectParser(String),

    /// User picked a unit in the format option control
    SetUnit(UnitOfMeasure),

    /// Re-check style and parser identity
    Refresh,

    /// Keystroke from the text surface
    UserEdit(String),

    /// Debounce interval elapsed
    CommitDue { ticket: u64, text: String },

    Serialized {
        generation: u64,
        result: Result<String, String>,
    },

    Deserialized {
        epoch: u64,
        result: Result<StyleDocument, String>,
    },

    Shutdown,
}

/// What the last accepted external change asked for
#[derive(Debug, Clone, PartialEq)]
struct SyncKey {
    style: StyleDocument,
    parser: Option<ParserIdentity>,
}

pub(crate) struct SyncController {
    registry: ParserRegistry,
    active: Option<ParserHandle>,
    style: StyleDocument,
    requested: Option<SyncKey>,

    /// Latest serialize issued
    generation: u64,

    /// Bumped on every user edit and every accepted external change
    edit_epoch: u64,

    debouncer: Debouncer,
    text: String,
    validation: ValidationState,
    show_save: bool,
    show_copy: bool,

    events: mpsc::UnboundedSender<EditorEvent>,
    view: watch::Sender<EditorView>,
    on_style_change: StyleChangeCallback,
}

impl SyncController {
    pub(crate) fn new(
        style: StyleDocument,
        registry: ParserRegistry,
        config: &EditorConfig,
        events: mpsc::UnboundedSender<EditorEvent>,
        view: watch::Sender<EditorView>,
        on_style_change: StyleChangeCallback,
    ) -> Self {
        let active = config
            .default_parser
            .as_deref()
            .and_then(|title| registry.select(title));

        let controller = Self {
            registry,
            active,
            style,
            requested: None,
            generation: 0,
            edit_epoch: 0,
            debouncer: Debouncer::new(config.debounce()),
            text: String::new(),
            validation: ValidationState::Clean,
            show_save: config.show_save_button,
            show_copy: config.show_copy_button,
            events,
            view,
            on_style_change,
        };
        controller.publish();
        controller
    }

    /// Process one event. Breaks once the session is shutting down.
    pub(crate) fn handle(&mut self, event: EditorEvent) -> ControlFlow<()> {
        match event {
            EditorEvent::SetStyle(style) => {
                self.style = style;
                self.reconcile();
            }
            EditorEvent::SelectParser(title) => self.select_parser(&title),
            EditorEvent::SetUnit(unit) => self.set_unit(unit),
            EditorEvent::Refresh => self.reconcile(),
            EditorEvent::UserEdit(text) => self.user_edit(text),
            EditorEvent::CommitDue { ticket, text } => self.commit(ticket, text),
            EditorEvent::Serialized { generation, result } => {
                self.apply_serialized(generation, result)
            }
            EditorEvent::Deserialized { epoch, result } => self.apply_deserialized(epoch, result),
            EditorEvent::Shutdown => {
                self.debouncer.cancel();
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Serialize the host style under the active parser, unless neither
    /// the style nor the parser identity changed since the last request.
    #[instrument(skip(self), fields(parser = ?self.active_title()))]
    pub(crate) fn reconcile(&mut self) {
        let key = SyncKey {
            style: self.style.clone(),
            parser: self.active.as_ref().map(ParserHandle::identity),
        };
        if self.requested.as_ref() == Some(&key) {
            debug!("Style and parser unchanged, skipping serialize");
            return;
        }
        self.requested = Some(key);

        self.debouncer.cancel();
        self.edit_epoch = self.edit_epoch.wrapping_add(1);
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        debug!(generation, "Serializing style");

        let pipeline = Pipeline::new(self.active.clone());
        let style = self.style.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = pipeline
                .serialize(&style)
                .await
                .map_err(|err| err.to_string());
            let _ = events.send(EditorEvent::Serialized { generation, result });
        });

        // Selector and option control follow the new parser right away;
        // the text follows once the serialize lands.
        self.publish();
    }

    fn select_parser(&mut self, title: &str) {
        self.active = self.registry.select(title);
        debug!(title, raw = self.active.is_none(), "Parser selected");
        self.reconcile();
    }

    fn set_unit(&mut self, unit: UnitOfMeasure) {
        let Some(parser) = self
            .active
            .as_ref()
            .filter(|parser| FormatOptions::is_available(Some(*parser)))
        else {
            debug!(%unit, "Active parser has no unit option, ignoring");
            return;
        };

        if parser.set_unit_of_measure(unit) {
            debug!(%unit, parser = parser.title(), "Unit of measure changed");
        }
        self.reconcile();
    }

    fn user_edit(&mut self, text: String) {
        if matches!(self.validation, ValidationState::SerializationFailed(_)) {
            debug!("Ignoring edit while the editor is faulted");
            return;
        }

        self.edit_epoch = self.edit_epoch.wrapping_add(1);
        self.text = text.clone();
        self.validation = match std::mem::take(&mut self.validation) {
            ValidationState::PendingUserEdit(message) => ValidationState::PendingUserEdit(message),
            _ => ValidationState::PendingUserEdit(None),
        };

        let events = self.events.clone();
        self.debouncer.schedule(move |ticket| {
            let _ = events.send(EditorEvent::CommitDue { ticket, text });
        });

        self.publish();
    }

    #[instrument(skip(self, text), fields(parser = ?self.active_title()))]
    fn commit(&mut self, ticket: u64, text: String) {
        if !self.debouncer.accept(ticket) {
            debug!(ticket, "Dropping superseded commit");
            return;
        }

        let epoch = self.edit_epoch;
        debug!(epoch, "Committing edit");

        let pipeline = Pipeline::new(self.active.clone());
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = pipeline
                .deserialize(&text)
                .await
                .map_err(|err| err.to_string());
            let _ = events.send(EditorEvent::Deserialized { epoch, result });
        });
    }

    fn apply_serialized(&mut self, generation: u64, result: Result<String, String>) {
        if generation != self.generation {
            warn!(
                generation,
                latest = self.generation,
                "Dropping stale serialize result"
            );
            return;
        }

        // Whatever the user typed while this was in flight loses to the host.
        self.debouncer.cancel();
        self.edit_epoch = self.edit_epoch.wrapping_add(1);

        match result {
            Ok(text) => {
                self.text = text;
                self.validation = ValidationState::Clean;
            }
            Err(message) => {
                warn!(parser = ?self.active_title(), %message, "Style cannot be serialized");
                self.validation = ValidationState::SerializationFailed(message);
            }
        }
        self.publish();
    }

    fn apply_deserialized(&mut self, epoch: u64, result: Result<StyleDocument, String>) {
        if epoch != self.edit_epoch {
            debug!(epoch, latest = self.edit_epoch, "Dropping stale commit result");
            return;
        }

        match result {
            Ok(style) => {
                self.validation = ValidationState::Clean;
                self.publish();
                (self.on_style_change)(style);
            }
            Err(message) => {
                debug!(%message, "Edit does not parse");
                self.validation = ValidationState::PendingUserEdit(Some(message));
                self.publish();
            }
        }
    }

    fn active_title(&self) -> Option<&str> {
        self.active.as_ref().map(ParserHandle::title)
    }

    fn build_view(&self) -> EditorView {
        EditorView {
            text: self.text.clone(),
            language: Language::for_parser(self.active.as_ref()),
            validation: self.validation.clone(),
            active_parser: self.active_title().map(str::to_string),
            format_options: FormatOptions::for_parser(self.active.as_ref()),
            style_name: self.style.name().map(str::to_string),
            show_save: self.show_save,
            show_copy: self.show_copy,
        }
    }

    fn publish(&self) {
        self.view.send_replace(self.build_view());
    }
}
