//! # moviebot Details Command
//!
//! File: bot/src/commands/details.rs
//! Author: Christi Mahu
//!
//! Implements `moviebot details`: looks up one movie by IMDb id or by exact
//! title and prints the formatted details. When the movie has a poster its
//! URL is printed above the text.
//!
//! ```bash
//! moviebot details tt0468569
//! moviebot details --title "The Matrix"
//! ```
//!
use clap::{ArgGroup, Parser};
use moviebot::core::config::{self, ConfigOverrides, Purpose};
use moviebot::core::error::Result;
use moviebot::dispatch::{CommandDispatcher, ConsoleTransport, Inbound};

/// Arguments for `moviebot details`.
#[derive(Parser, Debug)]
#[command(about = "Show full details for one movie")]
#[command(group(ArgGroup::new("key").required(true).args(["imdb_id", "title"])))]
pub struct DetailsArgs {
    /// IMDb id of the movie (e.g. tt0468569).
    imdb_id: Option<String>,

    /// Look the movie up by title instead of id.
    #[arg(long, short)]
    title: Option<String>,
}

pub async fn handle_details(args: DetailsArgs, overrides: &ConfigOverrides) -> Result<()> {
    let cfg = config::load_config(overrides, Purpose::Lookup)?;
    let dispatcher = CommandDispatcher::from_config(&cfg)?;
    let request = Inbound::new(
        0,
        0,
        format!("/details {}", args.imdb_id.as_deref().unwrap_or_default()),
    );

    dispatcher
        .details_and_reply(
            &ConsoleTransport,
            &request,
            args.imdb_id.as_deref(),
            args.title.as_deref(),
        )
        .await;
    Ok(())
}
