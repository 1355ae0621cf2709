mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, init, show, CheckArgs, InitArgs, ShowArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stylesync CLI - keep style documents and their text in sync
#[derive(Parser, Debug)]
#[command(name = "stylesync")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default stylesync.config.json
    Init(InitArgs),

    /// Print a style the way the editor shows it
    Show(ShowArgs),

    /// Commit text through an editor session and report the outcome
    Check(CheckArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Show(args) => show(args, &cwd).await,
        Command::Check(args) => check(args, &cwd).await,
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
