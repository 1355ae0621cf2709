use super::{read_style, wait_for_text};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use stylesync_editor::{EditSession, EditorConfig, ParserRegistry};
use tracing::debug;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Style document (JSON)
    pub input: PathBuf,
}

/// What `show` prints
#[derive(Debug)]
pub struct ShowOutput {
    pub text: String,

    /// Present when the config shows a save button
    pub save_as: Option<String>,
}

pub async fn show(args: ShowArgs, cwd: &Path) -> Result<()> {
    let output = render(args, cwd).await?;

    println!("{}", output.text);

    if let Some(file_name) = output.save_as {
        eprintln!();
        eprintln!("   {} {}", "Save as:".bright_blue(), file_name);
    }

    Ok(())
}

/// Open the style in a raw-mode session and take its first text
pub async fn render(args: ShowArgs, cwd: &Path) -> Result<ShowOutput> {
    let config = EditorConfig::load(cwd)?;
    let style = read_style(&args.input)?;
    debug!(input = %args.input.display(), "Rendering style");

    let session = EditSession::spawn(style, ParserRegistry::new(), &config, |_| {});
    let view = wait_for_text(&session).await;
    let download = session.download();
    session.shutdown().await;
    let view = view?;

    let save_as = download
        .filter(|_| config.show_save_button)
        .map(|download| download.file_name);

    Ok(ShowOutput {
        text: view.text,
        save_as,
    })
}
