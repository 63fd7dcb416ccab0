//! # moviebot Search Command
//!
//! File: bot/src/commands/search.rs
//! Author: Christi Mahu
//!
//! Implements `moviebot search <query...>`: one search through the same
//! dispatcher path the bot uses, with the reply printed to stdout.
//!
//! ```bash
//! moviebot search The Dark Knight
//! moviebot search star wars --page 2
//! ```
//!
use clap::Parser;
use moviebot::core::config::{self, ConfigOverrides, Purpose};
use moviebot::core::error::{BotError, Result};
use moviebot::dispatch::{CommandDispatcher, ConsoleTransport, Inbound};

/// Arguments for `moviebot search`.
#[derive(Parser, Debug)]
#[command(about = "Search movies by title and print the results")]
pub struct SearchArgs {
    /// Movie title to search for. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Result page to request from OMDb (10 results per page).
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,
}

pub async fn handle_search(args: SearchArgs, overrides: &ConfigOverrides) -> Result<()> {
    let query = args.query.join(" ").trim().to_string();
    if query.is_empty() {
        return Err(BotError::Usage("search query must not be blank".to_string()).into());
    }

    let cfg = config::load_config(overrides, Purpose::Lookup)?;
    let dispatcher = CommandDispatcher::from_config(&cfg)?;
    let request = Inbound::new(0, 0, format!("/search {}", query));

    dispatcher
        .search_and_reply(&ConsoleTransport, &request, &query, args.page)
        .await;
    Ok(())
}
