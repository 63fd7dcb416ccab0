//! # OMDb Lookup Errors
//!
//! File: bot/src/omdb/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `LookupError` is the error half of every OMDb result. The client never
//! panics or propagates a transport error past its boundary: connection
//! failures, timeouts, bad HTTP statuses, unreadable bodies and upstream
//! "not found" answers all end up here, and callers treat them as data.
//!
//! The `Display` strings are user-facing for the `Provider` and `MissingKey`
//! variants only. The dispatcher logs the other variants and shows a generic
//! message instead.
//!
use thiserror::Error;

/// Classified failure of a single OMDb request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Connectivity problems, timeouts and non-2xx HTTP statuses.
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream answered with something that is not the expected JSON.
    #[error("Invalid response format from API")]
    Decode,

    /// The upstream answered `"Response": "False"`; carries its `Error` text.
    #[error("{0}")]
    Provider(String),

    /// A details lookup was attempted without an IMDb id or a title.
    #[error("Either IMDb ID or title must be provided")]
    MissingKey,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Upstream `Error` texts that mean "no such movie" rather than a refusal.
const NO_MATCH_MESSAGES: [&str; 3] = ["not found", "incorrect imdb id", "too many results"];

impl LookupError {
    /// True when the upstream itself answered with an error message.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::Provider(_))
    }

    /// True for upstream answers that only say nothing matched the query.
    ///
    /// Other upstream errors ("Invalid API key!", "Request limit reached!")
    /// point at the deployment rather than the query.
    pub fn is_no_match(&self) -> bool {
        match self {
            LookupError::Provider(message) => {
                let message = message.to_lowercase();
                NO_MATCH_MESSAGES.iter().any(|m| message.contains(m))
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key; keep it out of messages and logs.
        let err = err.without_url();
        if err.is_timeout() {
            LookupError::Network("request timed out".to_string())
        } else if err.is_connect() {
            LookupError::Network(format!("failed to connect to the movie service ({})", err))
        } else if let Some(status) = err.status() {
            LookupError::Network(format!("HTTP {}", status))
        } else if err.is_decode() {
            LookupError::Decode
        } else if err.is_request() || err.is_body() {
            LookupError::Network(err.to_string())
        } else {
            LookupError::Unexpected(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(_: serde_json::Error) -> Self {
        LookupError::Decode
    }
}
