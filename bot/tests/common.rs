//! # moviebot Integration Test Common Helpers
//!
//! File: bot/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests:
//!
//! - [`moviebot_cmd`]: the compiled binary, isolated from the developer's
//!   own configuration and environment
//! - [`FakeOmdb`]: an in-process OMDb look-alike served by axum on an
//!   ephemeral port, counting every request it receives
//!
//! ## Fake upstream behavior
//!
//! | Query                    | Answer                                       |
//! |--------------------------|----------------------------------------------|
//! | `s=Inception`            | 2 results, `totalResults` 2                  |
//! | `s=Star Wars`            | 7 results, `totalResults` 431                |
//! | `s=broken`               | HTTP 500                                     |
//! | `s=garbage`              | a body that is not JSON                      |
//! | `s=slow`                 | Inception results after 2 seconds            |
//! | other `s=`               | `Response: False`, `Movie not found!`        |
//! | `i=tt1375666` / `t=Inception` | Inception, with an http poster          |
//! | `i=tt0000001`            | a movie whose poster is `N/A`                |
//! | other `i=` / `t=`        | `Response: False`, `Incorrect IMDb ID.`      |
//!
//! Any `apikey` other than [`API_KEY`] gets `Invalid API key!`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// API key the fake upstream accepts.
pub const API_KEY: &str = "test-key";

/// Poster URL returned for Inception.
pub const INCEPTION_POSTER: &str = "http://img.example.com/inception.jpg";

/// Environment variables that would leak the developer's setup into tests.
const MOVIEBOT_ENV: [&str; 7] = [
    "TELEGRAM_BOT_TOKEN",
    "OMDB_API_KEY",
    "OMDB_BASE_URL",
    "MOVIEBOT_TIMEOUT_SECS",
    "MOVIEBOT_MAX_RESULTS",
    "MOVIEBOT_CONFIG",
    "RUST_LOG",
];

/// The `moviebot` binary, run inside `home` with no inherited configuration.
///
/// `home` becomes HOME, XDG_CONFIG_HOME and the working directory, so
/// neither a user config file nor a `.env` file can be picked up.
pub fn moviebot_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moviebot").expect("Failed to find moviebot binary for testing");
    for var in MOVIEBOT_ENV {
        cmd.env_remove(var);
    }
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .current_dir(home);
    cmd
}

#[derive(Clone, Default)]
struct FakeState {
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// Handle to a running fake upstream.
pub struct FakeOmdb {
    pub base_url: Url,
    state: FakeState,
}

impl FakeOmdb {
    /// Binds to an ephemeral port and serves until the runtime shuts down.
    pub async fn start() -> Self {
        let state = FakeState::default();
        let app = Router::new()
            .route("/", get(omdb))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake OMDb listener");
        let addr = listener.local_addr().expect("fake OMDb address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake OMDb server");
        });

        Self {
            base_url: Url::parse(&format!("http://{}/", addr)).expect("fake OMDb URL"),
            state,
        }
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Query parameters of every request received so far.
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.lock().unwrap().clone()
    }
}

async fn omdb(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.queries.lock().unwrap().push(params.clone());

    if params.get("apikey").map(String::as_str) != Some(API_KEY) {
        return Json(not_found("Invalid API key!")).into_response();
    }

    if let Some(query) = params.get("s") {
        return match query.as_str() {
            "Inception" => Json(inception_search()).into_response(),
            "Star Wars" => Json(star_wars_search()).into_response(),
            "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
            "garbage" => (StatusCode::OK, "<html>definitely not json</html>").into_response(),
            "slow" => {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(inception_search()).into_response()
            }
            _ => Json(not_found("Movie not found!")).into_response(),
        };
    }

    let id = params.get("i").map(String::as_str);
    let title = params.get("t").map(String::as_str);
    match (id, title) {
        (Some("tt1375666"), _) | (None, Some("Inception")) => Json(inception()).into_response(),
        (Some("tt0000001"), _) => Json(posterless()).into_response(),
        _ => Json(not_found("Incorrect IMDb ID.")).into_response(),
    }
}

fn not_found(message: &str) -> Value {
    json!({ "Response": "False", "Error": message })
}

fn inception_search() -> Value {
    json!({
        "Search": [
            { "Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": INCEPTION_POSTER },
            { "Title": "Inception: The Cobol Job", "Year": "2010", "imdbID": "tt5295894", "Type": "movie", "Poster": "N/A" }
        ],
        "totalResults": "2",
        "Response": "True"
    })
}

fn star_wars_search() -> Value {
    let items: Vec<Value> = (1..=7)
        .map(|i| {
            json!({
                "Title": format!("Star Wars: Episode {}", i),
                "Year": format!("{}", 1976 + i),
                "imdbID": format!("tt00000{:02}", i),
                "Type": "movie",
                "Poster": "N/A"
            })
        })
        .collect();
    json!({ "Search": items, "totalResults": "431", "Response": "True" })
}

fn inception() -> Value {
    json!({
        "Title": "Inception",
        "Year": "2010",
        "Rated": "PG-13",
        "Runtime": "148 min",
        "Genre": "Action, Adventure, Sci-Fi",
        "Director": "Christopher Nolan",
        "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
        "Plot": "A thief who steals corporate secrets through dream-sharing technology.",
        "Language": "English, Japanese, French",
        "Country": "United States, United Kingdom",
        "Awards": "Won 4 Oscars. 159 wins & 220 nominations total",
        "Poster": INCEPTION_POSTER,
        "imdbRating": "8.8",
        "imdbID": "tt1375666",
        "Type": "movie",
        "Response": "True"
    })
}

fn posterless() -> Value {
    json!({
        "Title": "Obscure Short",
        "Year": "1901",
        "Runtime": "N/A",
        "Genre": "Short",
        "Director": "N/A",
        "Actors": "N/A",
        "Plot": "N/A",
        "Language": "None",
        "Country": "France",
        "Awards": "N/A",
        "Poster": "N/A",
        "imdbRating": "N/A",
        "imdbID": "tt0000001",
        "Response": "True"
    })
}
