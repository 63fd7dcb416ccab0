//! # moviebot Command Modules
//!
//! File: bot/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! Top-level subcommands of the `moviebot` binary. Each module defines its
//! clap arguments struct and an async `handle_*` function that `main.rs`
//! routes to.
//!

/// `moviebot run`: the Telegram bot.
pub mod run;
/// `moviebot search`: one-shot search printed to stdout.
pub mod search;
/// `moviebot details`: one-shot details lookup printed to stdout.
pub mod details;
