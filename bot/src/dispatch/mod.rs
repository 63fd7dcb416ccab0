//! # moviebot Command Dispatch (`dispatch`)
//!
//! File: bot/src/dispatch/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns inbound chat text into OMDb lookups and replies.
//!
//! ## Architecture
//!
//! ```text
//! Telegram update ─┐
//!                  ├─> Inbound ─> CommandDispatcher ─> MovieProvider (OMDb)
//! CLI arguments ───┘                     │
//!                                        └─> format ─> Transport (Telegram | console)
//! ```
//!
//! - `command`: classifies message text
//! - `handler`: [`CommandDispatcher`], the per-message sequence
//! - `messages`: fixed reply texts
//! - `transport`: the [`Transport`] seam and [`Inbound`] message
//! - `telegram` / `console`: the two transports
//!
pub mod command;
pub mod console;
pub mod handler;
pub mod messages;
pub mod telegram;
pub mod transport;

pub use command::Command;
pub use console::ConsoleTransport;
pub use handler::CommandDispatcher;
pub use telegram::TelegramTransport;
pub use transport::{Inbound, Markup, Transport};
