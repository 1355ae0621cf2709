//! # Edit Session
//!
//! Host-side handle to one running editor.
//!
//! The session owns a [`SyncController`] on its own task. Every method only
//! enqueues an event, so the host may call them in any order from anywhere;
//! the controller sees them one at a time. Rendering reads the latest
//! [`EditorView`] snapshot.

use crate::actions::{self, Download};
use crate::controller::{EditorEvent, StyleChangeCallback, SyncController};
use crate::registry::{ParserChoice, ParserRegistry};
use crate::view::EditorView;
use crate::{EditorConfig, EditorError, EditorResult};
use std::sync::Arc;
use stylesync_common::{StyleDocument, UnitOfMeasure};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Single running editor instance
pub struct EditSession {
    events: mpsc::UnboundedSender<EditorEvent>,
    view: watch::Receiver<EditorView>,
    choices: Vec<ParserChoice>,
    task: Option<JoinHandle<()>>,
}

impl EditSession {
    /// Mount an editor for `style` and start serializing it.
    ///
    /// `on_style_change` runs on the session task for every committed edit.
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(
        style: StyleDocument,
        registry: ParserRegistry,
        config: &EditorConfig,
        on_style_change: F,
    ) -> Self
    where
        F: Fn(StyleDocument) + Send + Sync + 'static,
    {
        Self::spawn_with_callback(style, registry, config, Arc::new(on_style_change))
    }

    pub fn spawn_with_callback(
        style: StyleDocument,
        registry: ParserRegistry,
        config: &EditorConfig,
        on_style_change: StyleChangeCallback,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(EditorView::default());
        let choices = registry.choices();

        let controller = SyncController::new(
            style,
            registry,
            config,
            events_tx.clone(),
            view_tx,
            on_style_change,
        );
        let task = tokio::spawn(run(controller, events_rx));

        Self {
            events: events_tx,
            view: view_rx,
            choices,
            task: Some(task),
        }
    }

    /// Host replaced its style
    pub fn set_style(&self, style: StyleDocument) -> EditorResult<()> {
        self.send(EditorEvent::SetStyle(style))
    }

    /// Switch format by selector title; unknown titles mean raw-object mode
    pub fn select_parser(&self, title: impl Into<String>) -> EditorResult<()> {
        self.send(EditorEvent::SelectParser(title.into()))
    }

    /// Change the unit option of the active parser
    pub fn set_unit_of_measure(&self, unit: UnitOfMeasure) -> EditorResult<()> {
        self.send(EditorEvent::SetUnit(unit))
    }

    /// Re-serialize if the style or the active parser's identity changed,
    /// e.g. after the host changed options on a parser handle directly
    pub fn refresh(&self) -> EditorResult<()> {
        self.send(EditorEvent::Refresh)
    }

    /// Text changed in the text surface
    pub fn user_edit(&self, text: impl Into<String>) -> EditorResult<()> {
        self.send(EditorEvent::UserEdit(text.into()))
    }

    /// Latest snapshot
    pub fn view(&self) -> EditorView {
        self.view.borrow().clone()
    }

    /// Receiver notified on every view change
    pub fn subscribe(&self) -> watch::Receiver<EditorView> {
        self.view.clone()
    }

    pub fn text(&self) -> String {
        self.view.borrow().text.clone()
    }

    /// Format selector entries
    pub fn parser_choices(&self) -> &[ParserChoice] {
        &self.choices
    }

    pub fn download(&self) -> Option<Download> {
        Download::from_view(&self.view.borrow())
    }

    pub fn copy_text(&self) -> Option<String> {
        actions::copy_text(&self.view.borrow())
    }

    /// Stop the session task and wait for it to finish
    pub async fn shutdown(mut self) {
        let _ = self.events.send(EditorEvent::Shutdown);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    fn send(&self, event: EditorEvent) -> EditorResult<()> {
        self.events
            .send(event)
            .map_err(|_| EditorError::SessionClosed)
    }
}

impl Drop for EditSession {
    fn drop(&mut self) {
        if self.task.is_some() {
            let _ = self.events.send(EditorEvent::Shutdown);
        }
    }
}

async fn run(mut controller: SyncController, mut events: mpsc::UnboundedReceiver<EditorEvent>) {
    info!("Edit session started");
    controller.reconcile();

    while let Some(event) = events.recv().await {
        debug!(?event, "Handling editor event");
        if controller.handle(event).is_break() {
            break;
        }
    }

    info!("Edit session stopped");
}
