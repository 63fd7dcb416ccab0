//! # moviebot Main Entry Point
//!
//! File: bot/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point for the `moviebot` binary. It handles:
//! - Loading a local `.env` file into the process environment
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `run` starts the Telegram bot and blocks until Ctrl+C / SIGTERM
//! - `search` and `details` perform one lookup and print the reply to stdout,
//!   through the same dispatcher the bot uses
//! - Configuration flags (`--config`, `--token`, `--api-key`, ...) are global
//!   and fall back to environment variables
//!
//! ## Examples
//!
//! ```bash
//! # Start the bot
//! TELEGRAM_BOT_TOKEN=... OMDB_API_KEY=... moviebot run
//!
//! # One-off lookups with debug logging
//! moviebot -vv search The Dark Knight
//! moviebot details tt0468569
//! ```
//!
use clap::Parser;
use moviebot::core::config::ConfigOverrides;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "moviebot",
    about = "🎬 moviebot: search the Open Movie Database from Telegram",
    long_about = "Telegram bot that searches movies on OMDb and shows details with posters.\n\
                  The same lookups are available directly from the command line.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(flatten)]
    config: ConfigOverrides,
}

#[derive(Parser, Debug)]
enum Commands {
    Run(commands::run::RunArgs),
    #[command(alias = "s")]
    Search(commands::search::SearchArgs),
    #[command(alias = "d")]
    Details(commands::details::DetailsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must happen before parsing so clap's `env` fallbacks see the values.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let quiet_level = match &cli.command {
        Commands::Run(_) => "info",
        _ => "warn",
    };
    let log_level = match cli.verbose {
        0 => quiet_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args, &cli.config).await,
        Commands::Search(args) => commands::search::handle_search(args, &cli.config).await,
        Commands::Details(args) => commands::details::handle_details(args, &cli.config).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
