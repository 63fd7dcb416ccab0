//! # moviebot Error Types
//!
//! File: bot/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the bot outside of the OMDb
//! client. The client has its own [`LookupError`](crate::omdb::LookupError),
//! which it always returns as data; the variants here describe what can go
//! wrong around it: startup configuration, user input, and message delivery.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `BotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Only `BotError::Config` is ever fatal. Everything else is caught at the
//! dispatcher boundary, logged, and turned into a fixed user-facing reply.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if token.is_empty() {
//!     return Err(BotError::Config("TELEGRAM_BOT_TOKEN is not set".into()).into());
//! }
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if e.downcast_ref::<BotError>().map_or(false, |be| be.is_config()) => {
//!         eprintln!("Fix your configuration first.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use crate::omdb::LookupError;
use thiserror::Error;

/// Custom error type for the moviebot application.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Usage(String),

    #[error("Failed to deliver message: {0}")]
    Delivery(String),

    #[error("Movie lookup failed: {source}")]
    Lookup {
        #[from]
        source: LookupError,
    },
}

impl BotError {
    /// True for errors that should stop the process at startup.
    pub fn is_config(&self) -> bool {
        matches!(self, BotError::Config(_))
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
