//! # Command Dispatcher
//!
//! File: bot/src/dispatch/handler.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `CommandDispatcher` handles one inbound message from start to finish:
//!
//! 1. Classify the text ([`Command::parse`])
//! 2. Answer static commands and usage errors directly
//! 3. For lookups: typing indicator → OMDb request → format → reply
//!
//! It holds no per-chat state, so the same instance can serve any number of
//! messages, concurrently or not.
//!
//! ## Failure handling
//!
//! Nothing escapes [`CommandDispatcher::handle`]. Upstream "not found"
//! answers are normal replies. Network, decode and delivery failures are
//! logged with full detail and the user gets a fixed apology instead
//! ([`SEARCH_FAILED`] / [`DETAILS_FAILED`]). A poster that cannot be sent,
//! or whose caption would exceed [`MAX_CAPTION_CHARS`], degrades to a
//! text-only reply.
//!
use super::command::Command;
use super::messages::{
    DETAILS_FAILED, DETAILS_USAGE, HELP, QUERY_TOO_SHORT, SEARCH_FAILED, SEARCH_USAGE, WELCOME,
};
use super::transport::{Inbound, Markup, Transport};
use crate::core::config::Config;
use crate::core::error::{BotError, Result};
use crate::format::{format_movie, format_search_results};
use crate::omdb::{LookupError, MovieProvider, OmdbClient};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Free text shorter than this (in characters) is not searched.
pub const MIN_QUERY_CHARS: usize = 2;

/// Telegram rejects photo captions longer than this (in characters).
pub const MAX_CAPTION_CHARS: usize = 1024;

/// Routes inbound messages to the movie provider and sends the replies.
#[derive(Clone)]
pub struct CommandDispatcher {
    provider: Arc<dyn MovieProvider>,
    max_results: usize,
}

impl CommandDispatcher {
    pub fn new(provider: Arc<dyn MovieProvider>, max_results: usize) -> Self {
        Self {
            provider,
            max_results,
        }
    }

    /// Builds the dispatcher with a real OMDb client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = OmdbClient::from_config(&config.omdb)?;
        Ok(Self::new(Arc::new(client), config.display.max_results))
    }

    /// Handles one inbound message to completion.
    pub async fn handle(&self, transport: &dyn Transport, msg: &Inbound) {
        let command = Command::parse(&msg.text);
        debug!("Chat {}: handling {:?}", msg.chat_id, command);

        match command {
            Command::Start => self.send(transport, msg, WELCOME, Markup::Markdown).await,
            Command::Help => self.send(transport, msg, HELP, Markup::Markdown).await,
            Command::Search(query) if query.is_empty() => {
                self.send(transport, msg, SEARCH_USAGE, Markup::Markdown).await
            }
            Command::Search(query) => self.search_and_reply(transport, msg, &query, 1).await,
            Command::Details(id) if id.is_empty() => {
                self.send(transport, msg, DETAILS_USAGE, Markup::Markdown).await
            }
            Command::Details(id) => {
                self.details_and_reply(transport, msg, Some(&id), None)
                    .await
            }
            Command::Text(text) if text.chars().count() < MIN_QUERY_CHARS => {
                self.send(transport, msg, QUERY_TOO_SHORT, Markup::Plain).await
            }
            Command::Text(query) => self.search_and_reply(transport, msg, &query, 1).await,
        }
    }

    /// Searches for `query` and replies with the formatted result list.
    pub async fn search_and_reply(
        &self,
        transport: &dyn Transport,
        msg: &Inbound,
        query: &str,
        page: u32,
    ) {
        info!("Chat {}: search '{}' (page {})", msg.chat_id, query, page);
        if let Err(e) = self.try_search(transport, msg, query, page).await {
            error!("Error in movie search for '{}': {:#}", query, e);
            self.send(transport, msg, SEARCH_FAILED, Markup::Plain).await;
        }
    }

    async fn try_search(
        &self,
        transport: &dyn Transport,
        msg: &Inbound,
        query: &str,
        page: u32,
    ) -> Result<()> {
        self.typing(transport, msg).await;

        let result = self.provider.search(query, page).await;
        if let Err(e) = &result {
            if !e.is_not_found() {
                return Err(BotError::from(e.clone()).into());
            }
        }

        let text = format_search_results(&result, self.max_results);
        transport.reply(msg, &text, Markup::Markdown).await
    }

    /// Looks up one movie and replies with its details, attaching the poster
    /// when there is one.
    pub async fn details_and_reply(
        &self,
        transport: &dyn Transport,
        msg: &Inbound,
        imdb_id: Option<&str>,
        title: Option<&str>,
    ) {
        info!(
            "Chat {}: details (id {:?}, title {:?})",
            msg.chat_id, imdb_id, title
        );
        if let Err(e) = self.try_details(transport, msg, imdb_id, title).await {
            error!("Error getting movie details: {:#}", e);
            self.send(transport, msg, DETAILS_FAILED, Markup::Plain).await;
        }
    }

    async fn try_details(
        &self,
        transport: &dyn Transport,
        msg: &Inbound,
        imdb_id: Option<&str>,
        title: Option<&str>,
    ) -> Result<()> {
        self.typing(transport, msg).await;

        let movie = match self.provider.details(imdb_id, title).await {
            Ok(movie) => movie,
            Err(e @ (LookupError::Provider(_) | LookupError::MissingKey)) => {
                return transport
                    .reply(msg, &format!("❌ {}", e), Markup::Plain)
                    .await;
            }
            Err(e) => return Err(BotError::from(e).into()),
        };

        let caption = format_movie(&movie);
        let Some(poster) = movie.poster_url() else {
            return transport.reply(msg, &caption, Markup::Markdown).await;
        };
        if caption.chars().count() > MAX_CAPTION_CHARS {
            debug!(
                "Chat {}: details too long for a caption, sending text only",
                msg.chat_id
            );
            return transport.reply(msg, &caption, Markup::Markdown).await;
        }

        match transport
            .send_image(msg, &poster, &caption, Markup::Markdown)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Failed to send poster {}: {:#}", poster, e);
                transport.reply(msg, &caption, Markup::Markdown).await
            }
        }
    }

    async fn typing(&self, transport: &dyn Transport, msg: &Inbound) {
        if let Err(e) = transport.send_typing(msg.chat_id).await {
            debug!("Chat {}: typing indicator failed: {:#}", msg.chat_id, e);
        }
    }

    /// Sends a reply whose failure has nowhere else to go.
    async fn send(&self, transport: &dyn Transport, msg: &Inbound, text: &str, markup: Markup) {
        if let Err(e) = transport.reply(msg, text, markup).await {
            error!("Chat {}: failed to send reply: {:#}", msg.chat_id, e);
        }
    }
}
