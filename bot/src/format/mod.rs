//! # moviebot Presentation (`format`)
//!
//! File: bot/src/format/mod.rs
//! Author: Christi Mahu
//!
//! Pure functions that render OMDb results as Markdown chat messages. Nothing
//! in here performs I/O, so the dispatcher, the console transport and the
//! tests all share the exact same output.
//!
pub mod markdown;
pub mod render;

pub use markdown::escape;
pub use render::{format_details, format_movie, format_search_results, DETAILS_HINT, NO_RESULTS};
