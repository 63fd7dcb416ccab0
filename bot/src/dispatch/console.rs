//! # Console Transport
//!
//! File: bot/src/dispatch/console.rs
//! Author: Christi Mahu
//!
//! Prints replies to stdout so `moviebot search` and `moviebot details` can
//! reuse the exact dispatcher path the bot uses, without Telegram.
//!
use super::transport::{Inbound, Markup, Transport};
use crate::core::error::Result;
use async_trait::async_trait;
use reqwest::Url;

/// Writes every reply to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleTransport;

#[async_trait]
impl Transport for ConsoleTransport {
    async fn send_typing(&self, _chat_id: i64) -> Result<()> {
        Ok(())
    }

    async fn reply(&self, _to: &Inbound, text: &str, _markup: Markup) -> Result<()> {
        println!("{}", text);
        Ok(())
    }

    async fn send_image(
        &self,
        _to: &Inbound,
        image: &Url,
        caption: &str,
        _markup: Markup,
    ) -> Result<()> {
        println!("🖼️ Poster: {}\n", image);
        println!("{}", caption);
        Ok(())
    }
}
