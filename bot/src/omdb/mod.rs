//! # moviebot OMDb Client (`omdb`)
//!
//! File: bot/src/omdb/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything that talks to the Open Movie Database lives here:
//!
//! - `client`: the reqwest-based [`OmdbClient`] and the [`MovieProvider`] trait
//! - `models`: typed records ([`SearchPage`], [`MovieDetail`]) and the decode step
//! - `error`: [`LookupError`], the classified failure returned as data
//!
//! ## Usage
//!
//! ```rust,ignore
//! use moviebot::omdb::{MovieProvider, OmdbClient};
//!
//! let client = OmdbClient::from_config(&config.omdb)?;
//! match client.search("Inception", 1).await {
//!     Ok(page) => println!("{} hits", page.items.len()),
//!     Err(e) => println!("lookup failed: {}", e),
//! }
//! ```
//!
pub mod client;
pub mod error;
pub mod models;

pub use client::{MovieProvider, OmdbClient};
pub use error::LookupError;
pub use models::{
    DetailResult, MovieDetail, MovieSummary, SearchPage, SearchResult, NOT_AVAILABLE,
};
