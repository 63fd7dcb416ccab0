//! # Messaging Transport Abstraction
//!
//! File: bot/src/dispatch/transport.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The dispatcher never talks to Telegram directly. It sees an [`Inbound`]
//! message and answers through a [`Transport`], which knows how to show a
//! typing indicator, reply with text, and send an image with a caption.
//!
//! Implementations:
//! - [`TelegramTransport`](super::telegram::TelegramTransport) for the bot
//! - [`ConsoleTransport`](super::console::ConsoleTransport) for one-shot CLI lookups
//!
//! Delivery failures are reported as [`BotError::Delivery`](crate::core::error::BotError)
//! wrapped in the crate's `Result`.
//!
use crate::core::error::Result;
use async_trait::async_trait;
use reqwest::Url;

/// A text message received from a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub chat_id: i64,
    pub message_id: i32,
    pub text: String,
}

impl Inbound {
    pub fn new(chat_id: i64, message_id: i32, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            message_id,
            text: text.into(),
        }
    }
}

/// How the receiving client should interpret a reply body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Telegram Markdown: `*bold*`, `` `code` ``, backslash escapes.
    Markdown,
    /// Shown verbatim.
    Plain,
}

/// Outbound side of a chat.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Shows a "typing..." indicator in the chat.
    async fn send_typing(&self, chat_id: i64) -> Result<()>;

    /// Replies to `to` with a text message.
    async fn reply(&self, to: &Inbound, text: &str, markup: Markup) -> Result<()>;

    /// Sends an image to the chat of `to`, with `caption` underneath.
    async fn send_image(&self, to: &Inbound, image: &Url, caption: &str, markup: Markup)
        -> Result<()>;
}
