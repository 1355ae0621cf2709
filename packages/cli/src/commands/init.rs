use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;
use stylesync_editor::{EditorConfig, DEFAULT_CONFIG_NAME, DEFAULT_DEBOUNCE_MS};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Quiet interval before an edit is committed, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Parser active when an editor opens
    #[arg(short = 'p', long)]
    pub default_parser: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut config = EditorConfig::default().with_debounce_ms(args.debounce_ms);
    config.default_parser = args.default_parser;
    config.save(cwd)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    Ok(())
}
