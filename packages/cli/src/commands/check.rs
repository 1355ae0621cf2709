use super::{read_style, wait_for_text};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use stylesync_editor::{EditSession, EditorConfig, ParserRegistry, StyleDocument};
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Style document (JSON) the editor opens with
    pub style: PathBuf,

    /// File whose contents are typed into the editor (defaults to the
    /// editor's own text for the style)
    #[arg(short, long)]
    pub text: Option<PathBuf>,
}

/// Outcome of committing text through a session
#[derive(Debug)]
pub enum CheckOutcome {
    Committed(StyleDocument),
    Invalid(String),
}

pub async fn check(args: CheckArgs, cwd: &Path) -> Result<()> {
    let config = EditorConfig::load(cwd)?;
    let style = read_style(&args.style)?;
    let text = match &args.text {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read {}", path.display()))?,
        ),
        None => None,
    };

    match commit_text(style, text, &config).await? {
        CheckOutcome::Committed(style) => {
            println!("{} Text is valid", "✓".green());
            println!("{}", serde_json::to_string_pretty(&style)?);
            Ok(())
        }
        CheckOutcome::Invalid(message) => {
            println!("{} Text does not parse", "✗".red());
            println!("{}", message);
            Err(anyhow!("Text does not parse"))
        }
    }
}

/// Type `text` into a raw-mode session for `style` and wait for the commit
pub async fn commit_text(
    style: StyleDocument,
    text: Option<String>,
    config: &EditorConfig,
) -> Result<CheckOutcome> {
    debug!(style = ?style.name(), "Opening raw-mode session");
    let (committed_tx, mut committed_rx) = mpsc::unbounded_channel();
    let session = EditSession::spawn(style, ParserRegistry::new(), config, move |style| {
        let _ = committed_tx.send(style);
    });

    let outcome = type_and_wait(&session, text, &mut committed_rx).await;
    session.shutdown().await;

    match &outcome {
        Ok(CheckOutcome::Committed(style)) => info!(style = ?style.name(), "Text committed"),
        Ok(CheckOutcome::Invalid(message)) => info!(%message, "Text rejected"),
        Err(err) => debug!(%err, "Check did not finish"),
    }
    outcome
}

async fn type_and_wait(
    session: &EditSession,
    text: Option<String>,
    committed: &mut mpsc::UnboundedReceiver<StyleDocument>,
) -> Result<CheckOutcome> {
    let view = wait_for_text(session).await?;
    session.user_edit(text.unwrap_or(view.text))?;

    let mut views = session.subscribe();
    tokio::select! {
        Some(style) = committed.recv() => Ok(CheckOutcome::Committed(style)),
        invalid = views.wait_for(|view| view.inline_message().is_some()) => {
            let view = invalid.map_err(|_| anyhow!("Edit session stopped unexpectedly"))?;
            let message = view.inline_message().unwrap_or_default().to_string();
            Ok(CheckOutcome::Invalid(message))
        }
    }
}
