pub mod check;
pub mod init;
pub mod show;

pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use show::{show, ShowArgs};

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use stylesync_editor::{EditSession, EditorView, StyleDocument};

/// Read a style document from a JSON file
pub(crate) fn read_style(path: &Path) -> Result<StyleDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    StyleDocument::from_json(&content)
        .with_context(|| format!("{} is not a JSON style document", path.display()))
}

/// Wait for the session's first serialize to land
pub(crate) async fn wait_for_text(session: &EditSession) -> Result<EditorView> {
    let mut views = session.subscribe();
    let view = views
        .wait_for(|view| !view.text.is_empty() || view.is_faulted())
        .await
        .map_err(|_| anyhow!("Edit session stopped unexpectedly"))?
        .clone();

    match view.fault_message() {
        Some(message) => Err(anyhow!("Style cannot be serialized: {}", message)),
        None => Ok(view),
    }
}
