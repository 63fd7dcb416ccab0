//! # Telegram Transport
//!
//! File: bot/src/dispatch/telegram.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! [`Transport`] implementation on top of the Telegram Bot API via teloxide.
//! Replies are threaded to the inbound message. Markdown replies use
//! Telegram's legacy `Markdown` parse mode, which matches the escaping done
//! by [`crate::format::escape`].
//!
use super::transport::{Inbound, Markup, Transport};
use crate::core::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::Url;
use teloxide::payloads::{SendMessageSetters, SendPhotoSetters};
use teloxide::requests::Requester;
use teloxide::types::{
    ChatAction, ChatId, InputFile, Message, MessageId, ParseMode, ReplyParameters,
};
use teloxide::Bot;

/// Sends replies through a teloxide [`Bot`].
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[allow(deprecated)]
fn parse_mode(markup: Markup) -> Option<ParseMode> {
    match markup {
        Markup::Markdown => Some(ParseMode::Markdown),
        Markup::Plain => None,
    }
}

fn delivery(e: teloxide::RequestError) -> anyhow::Error {
    BotError::Delivery(e.to_string()).into()
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_typing(&self, chat_id: i64) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat_id), ChatAction::Typing)
            .await
            .map_err(delivery)?;
        Ok(())
    }

    async fn reply(&self, to: &Inbound, text: &str, markup: Markup) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(to.chat_id), text)
            .reply_parameters(ReplyParameters::new(MessageId(to.message_id)));
        if let Some(mode) = parse_mode(markup) {
            request = request.parse_mode(mode);
        }
        request.await.map_err(delivery)?;
        Ok(())
    }

    async fn send_image(
        &self,
        to: &Inbound,
        image: &Url,
        caption: &str,
        markup: Markup,
    ) -> Result<()> {
        let mut request = self
            .bot
            .send_photo(ChatId(to.chat_id), InputFile::url(image.clone()))
            .caption(caption)
            .reply_parameters(ReplyParameters::new(MessageId(to.message_id)));
        if let Some(mode) = parse_mode(markup) {
            request = request.parse_mode(mode);
        }
        request.await.map_err(delivery)?;
        Ok(())
    }
}

/// Extracts the parts the dispatcher needs from a Telegram message.
///
/// Returns `None` for messages without text (stickers, photos, joins...).
pub fn inbound_from(msg: &Message) -> Option<Inbound> {
    msg.text()
        .map(|text| Inbound::new(msg.chat.id.0, msg.id.0, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_replies_use_legacy_markdown() {
        #[allow(deprecated)]
        let expected = Some(ParseMode::Markdown);
        assert_eq!(parse_mode(Markup::Markdown), expected);
        assert_eq!(parse_mode(Markup::Plain), None);
    }
}
