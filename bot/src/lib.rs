//! # moviebot Library
//!
//! File: bot/src/lib.rs
//! Author: Christi Mahu
//!
//! A Telegram bot that searches the Open Movie Database (OMDb).
//!
//! - [`omdb`]: HTTP client and typed results
//! - [`format`]: Markdown rendering of results
//! - [`dispatch`]: command handling and chat transports
//! - [`core`]: configuration and error types
//!
pub mod core;
pub mod dispatch;
pub mod format;
pub mod omdb;
