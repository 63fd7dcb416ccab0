//! # OMDb Records and Decoding
//!
//! File: bot/src/omdb/models.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! OMDb answers every request with a flat JSON object whose keys are
//! PascalCase strings (`Title`, `Year`, `imdbRating`, ...) and whose values
//! are almost always strings, including numbers. This module keeps that raw
//! shape private (`Raw*` structs) and exposes typed records instead:
//!
//! - [`SearchPage`] / [`MovieSummary`] for `?s=` searches
//! - [`MovieDetail`] for `?i=` / `?t=` lookups
//!
//! Decoding is tolerant. Missing text fields become the upstream's own
//! `"N/A"` marker, a missing IMDb id becomes an empty string, and a
//! `totalResults` that is absent or not a number becomes `None`. Values of an
//! unexpected JSON type (a number where a string was expected) are converted
//! or dropped rather than failing the whole response. Only a body that is not
//! JSON at all is a [`LookupError::Decode`].
//!
use super::error::LookupError;
use reqwest::Url;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The upstream's "not available" marker, also used for missing fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Error text used when OMDb says `"Response": "False"` without an `Error`.
const DEFAULT_PROVIDER_ERROR: &str = "Movie not found!";

/// Outcome of a search request.
pub type SearchResult = Result<SearchPage, LookupError>;

/// Outcome of a details request.
pub type DetailResult = Result<MovieDetail, LookupError>;

/// One entry of a search result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub title: String,
    pub year: String,
    /// IMDb id (`tt...`), used for `/details` lookups.
    pub imdb_id: String,
}

/// A page of search results as returned by the upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Total number of matches across all pages, when the upstream reports it.
    pub total_results: Option<u32>,
    pub items: Vec<MovieSummary>,
}

/// Full record for a single movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetail {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub rating: String,
    pub runtime: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    /// Raw poster field; may be `"N/A"` or empty. See [`MovieDetail::poster_url`].
    pub poster: String,
    pub imdb_id: String,
}

impl MovieDetail {
    /// Poster location, if the upstream supplied a usable absolute URL.
    pub fn poster_url(&self) -> Option<Url> {
        let raw = self.poster.trim();
        if raw.is_empty() || raw == NOT_AVAILABLE {
            return None;
        }
        Url::parse(raw)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }

    /// True when the awards field carries real content.
    pub fn has_awards(&self) -> bool {
        let awards = self.awards.trim();
        !awards.is_empty() && awards != NOT_AVAILABLE
    }
}

// --- Raw wire format ---

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEnvelope {
    #[serde(rename = "Response", deserialize_with = "lenient_string")]
    response: Option<String>,
    #[serde(rename = "Error", deserialize_with = "lenient_string")]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSearch {
    #[serde(rename = "Search", deserialize_with = "lenient_list")]
    search: Vec<RawSummary>,
    #[serde(rename = "totalResults", deserialize_with = "lenient_string")]
    total_results: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSummary {
    #[serde(rename = "Title", deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(rename = "Year", deserialize_with = "lenient_string")]
    year: Option<String>,
    #[serde(rename = "imdbID", deserialize_with = "lenient_string")]
    imdb_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDetail {
    #[serde(rename = "Title", deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(rename = "Year", deserialize_with = "lenient_string")]
    year: Option<String>,
    #[serde(rename = "Genre", deserialize_with = "lenient_string")]
    genre: Option<String>,
    #[serde(rename = "Director", deserialize_with = "lenient_string")]
    director: Option<String>,
    #[serde(rename = "Actors", deserialize_with = "lenient_string")]
    actors: Option<String>,
    #[serde(rename = "Plot", deserialize_with = "lenient_string")]
    plot: Option<String>,
    #[serde(rename = "imdbRating", deserialize_with = "lenient_string")]
    rating: Option<String>,
    #[serde(rename = "Runtime", deserialize_with = "lenient_string")]
    runtime: Option<String>,
    #[serde(rename = "Language", deserialize_with = "lenient_string")]
    language: Option<String>,
    #[serde(rename = "Country", deserialize_with = "lenient_string")]
    country: Option<String>,
    #[serde(rename = "Awards", deserialize_with = "lenient_string")]
    awards: Option<String>,
    #[serde(rename = "Poster", deserialize_with = "lenient_string")]
    poster: Option<String>,
    #[serde(rename = "imdbID", deserialize_with = "lenient_string")]
    imdb_id: Option<String>,
}

/// Accepts any JSON value: strings pass through, numbers and booleans are
/// stringified, everything else is treated as missing.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Accepts an array of objects; anything else (or any non-object element)
/// is skipped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<RawSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Parses the body and checks the `Response` envelope.
fn parse_envelope(body: &[u8]) -> Result<Value, LookupError> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(LookupError::Decode);
    }
    let envelope: RawEnvelope = serde_json::from_value(value.clone())?;
    let failed = envelope
        .response
        .as_deref()
        .is_some_and(|r| r.trim().eq_ignore_ascii_case("false"));
    if failed {
        let message = envelope
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER_ERROR.to_string());
        return Err(LookupError::Provider(message));
    }
    Ok(value)
}

/// Decodes the body of a `?s=` search response.
pub fn decode_search(body: &[u8]) -> SearchResult {
    let value = parse_envelope(body)?;
    let raw: RawSearch = serde_json::from_value(value)?;
    let items = raw
        .search
        .into_iter()
        .map(|m| MovieSummary {
            title: or_not_available(m.title),
            year: or_not_available(m.year),
            imdb_id: m.imdb_id.unwrap_or_default(),
        })
        .collect();
    Ok(SearchPage {
        total_results: raw
            .total_results
            .and_then(|t| t.trim().parse::<u32>().ok()),
        items,
    })
}

/// Decodes the body of an `?i=` / `?t=` details response.
pub fn decode_details(body: &[u8]) -> DetailResult {
    let value = parse_envelope(body)?;
    let raw: RawDetail = serde_json::from_value(value)?;
    Ok(MovieDetail {
        title: or_not_available(raw.title),
        year: or_not_available(raw.year),
        genre: or_not_available(raw.genre),
        director: or_not_available(raw.director),
        actors: or_not_available(raw.actors),
        plot: or_not_available(raw.plot),
        rating: or_not_available(raw.rating),
        runtime: or_not_available(raw.runtime),
        language: or_not_available(raw.language),
        country: or_not_available(raw.country),
        awards: or_not_available(raw.awards),
        poster: or_not_available(raw.poster),
        imdb_id: raw.imdb_id.unwrap_or_default(),
    })
}
