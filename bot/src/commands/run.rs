//! # moviebot Run Command
//!
//! File: bot/src/commands/run.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `moviebot run`: connects to Telegram with long polling and
//! hands every text message to the [`CommandDispatcher`].
//!
//! ## Architecture
//!
//! 1. Load and validate configuration (token and API key both required)
//! 2. Build the OMDb client / dispatcher and the teloxide `Bot`
//! 3. Verify the token with `getMe` so a bad token fails fast
//! 4. Run the teloxide dispatcher until Ctrl+C or SIGTERM
//!
//! teloxide handles updates from different chats concurrently and updates
//! from the same chat in order. The [`CommandDispatcher`] is shared behind an
//! `Arc` and holds no per-chat state.
//!
use anyhow::Context;
use clap::Parser;
use moviebot::core::config::{self, ConfigOverrides, Purpose};
use moviebot::core::error::Result;
use moviebot::dispatch::telegram::inbound_from;
use moviebot::dispatch::{CommandDispatcher, TelegramTransport};
use std::sync::Arc;
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::requests::{Requester, ResponseResult};
use teloxide::types::{Message, Update};
use teloxide::Bot;
use tracing::{debug, error, info};

/// Arguments for `moviebot run`.
#[derive(Parser, Debug)]
#[command(about = "Start the Telegram bot (long polling)")]
pub struct RunArgs {}

/// Starts the bot and blocks until a shutdown signal arrives.
pub async fn handle_run(_args: RunArgs, overrides: &ConfigOverrides) -> Result<()> {
    let cfg = config::load_config(overrides, Purpose::Bot)?;
    info!("Telegram token and OMDb API key are configured");
    info!(
        "OMDb endpoint: {} (timeout {}s, {} results per search)",
        cfg.omdb.base_url, cfg.omdb.timeout_secs, cfg.display.max_results
    );

    let dispatcher = Arc::new(CommandDispatcher::from_config(&cfg)?);
    let bot = Bot::new(cfg.telegram.token.expose());

    let me = bot
        .get_me()
        .await
        .context("Failed to reach Telegram; check TELEGRAM_BOT_TOKEN")?;
    info!("🎬 Movie Search Bot started as @{}", me.username());
    println!("Bot @{} is running. Press Ctrl+C to stop.", me.username());

    let transport = TelegramTransport::new(bot.clone());
    let handler = Update::filter_message().endpoint(on_message);

    let mut updates = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![dispatcher, transport])
        .default_handler(|update| async move {
            debug!("Ignoring unsupported update {:?}", update.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error occurred in the update handler",
        ))
        .build();

    let token = updates.shutdown_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        match token.shutdown() {
            Ok(done) => done.await,
            Err(e) => debug!("Dispatcher was not running: {:?}", e),
        }
    });

    updates.dispatch().await;

    println!("\nBot stopped.");
    Ok(())
}

/// Endpoint for every message update.
async fn on_message(
    msg: Message,
    dispatcher: Arc<CommandDispatcher>,
    transport: TelegramTransport,
) -> ResponseResult<()> {
    match inbound_from(&msg) {
        Some(inbound) => dispatcher.handle(&transport, &inbound).await,
        None => debug!("Chat {}: ignoring non-text message", msg.chat.id.0),
    }
    Ok(())
}

/// Resolves on Ctrl+C or (on Unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, shutting down...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
