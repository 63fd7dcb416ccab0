//! # Reply Rendering
//!
//! File: bot/src/format/render.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns OMDb results into the Markdown text the bot sends back:
//!
//! - [`format_search_results`]: numbered list of matches plus a hint line
//! - [`format_details`] / [`format_movie`]: one movie, section by section
//!
//! Free-text fields go through [`escape`]; year, rating and runtime are
//! inserted as-is.
//!
use super::markdown::escape;
use crate::omdb::{DetailResult, MovieDetail, SearchPage, SearchResult};
use std::fmt::Write;

/// Shown when a search has no usable results.
pub const NO_RESULTS: &str = "❌ No movies found matching your search.";

/// Closing line of every result list.
pub const DETAILS_HINT: &str = "💡 Use /details <IMDb\\_ID> to get full details of any movie\\.";

/// Renders a search outcome, listing at most `limit` entries.
///
/// Errors and empty pages both render [`NO_RESULTS`]. Entries past `limit`
/// are dropped without notice.
pub fn format_search_results(result: &SearchResult, limit: usize) -> String {
    match result {
        Ok(page) if !page.items.is_empty() => render_page(page, limit),
        _ => NO_RESULTS.to_string(),
    }
}

fn render_page(page: &SearchPage, limit: usize) -> String {
    let total = page
        .total_results
        .map(|t| t as usize)
        .unwrap_or(page.items.len());
    let mut message = format!("🔍 *Search Results* (Found {} movies):\n\n", total);

    for (i, movie) in page.items.iter().take(limit).enumerate() {
        // `write!` into a String cannot fail.
        let _ = write!(
            message,
            "{}\\. *{}* ({})\n   IMDb ID: `{}`\n\n",
            i + 1,
            escape(&movie.title),
            movie.year,
            movie.imdb_id
        );
    }

    message.push_str(DETAILS_HINT);
    message
}

/// Renders a details outcome; errors become a single `❌ Error:` line.
pub fn format_details(result: &DetailResult) -> String {
    match result {
        Ok(movie) => format_movie(movie),
        Err(e) => format!("❌ Error: {}", e),
    }
}

/// Renders one movie. Also used as the poster caption.
pub fn format_movie(movie: &MovieDetail) -> String {
    let mut message = format!("🎬 *{}* ({})\n\n", escape(&movie.title), movie.year);
    let _ = writeln!(message, "📝 *Plot:* {}\n", escape(&movie.plot));
    let _ = writeln!(message, "🎭 *Genre:* {}", escape(&movie.genre));
    let _ = writeln!(message, "🎬 *Director:* {}", escape(&movie.director));
    let _ = writeln!(message, "👥 *Actors:* {}", escape(&movie.actors));
    let _ = writeln!(message, "⭐ *IMDb Rating:* {}/10", movie.rating);
    let _ = writeln!(message, "⏱️ *Runtime:* {}", movie.runtime);
    let _ = writeln!(message, "🌍 *Language:* {}", escape(&movie.language));
    let _ = writeln!(message, "🏁 *Country:* {}", escape(&movie.country));
    if movie.has_awards() {
        let _ = writeln!(message, "🏆 *Awards:* {}", escape(&movie.awards));
    }
    message
}
