//! # moviebot Configuration System
//!
//! File: bot/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the settings the bot needs: the
//! Telegram bot token, the OMDb API key and base URL, the request timeout and
//! the number of search results to display. The result is a single
//! [`Config`] value that is built once at startup and handed to the client
//! and the dispatcher. Nothing reads settings from globals afterwards.
//!
//! ## Architecture
//!
//! Configuration sources (lowest to highest precedence):
//! 1. Default values defined in the code
//! 2. The TOML file given with `--config`, otherwise the user file
//!    `config.toml` in the platform config directory
//!    (e.g. `~/.config/moviebot/config.toml`)
//! 3. Environment variables (a local `.env` is loaded first by `main`)
//! 4. Command-line flags
//!
//! Sources 3 and 4 both arrive through [`ConfigOverrides`], whose clap
//! arguments fall back to the environment.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [telegram]
//! token = "123456:ABC..."
//!
//! [omdb]
//! api_key = "abcd1234"
//! base_url = "http://www.omdbapi.com/"
//! timeout_secs = 30
//!
//! [display]
//! max_results = 5
//! ```
//!
//! Loading:
//!
//! ```rust,ignore
//! let cfg = config::load_config(&cli.config, Purpose::Bot)?;
//! let client = OmdbClient::from_config(&cfg.omdb)?;
//! ```
//!
//! A missing or placeholder token (for `run`) or API key (always) is a
//! [`BotError::Config`] and stops the process.
//!
use crate::core::error::{BotError, Result};
use anyhow::{anyhow, Context};
use clap::Args;
use directories::ProjectDirs;
use reqwest::Url;
use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Default OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of search results shown per reply.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Values shipped in sample configs; treated the same as "unset".
const TOKEN_PLACEHOLDER: &str = "your_telegram_bot_token";
const API_KEY_PLACEHOLDER: &str = "your_omdb_api_key";

const CONFIG_FILE_NAME: &str = "config.toml";

/// What the loaded configuration will be used for. Decides which secrets are
/// mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    /// One-shot lookups from the command line: only the API key is needed.
    Lookup,
    /// The Telegram bot: token and API key are needed.
    Bot,
}

/// A credential that must not show up in logs.
///
/// Surrounding whitespace is dropped on construction, so the value that is
/// validated is exactly the value that is sent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    fn is_unset(&self, placeholder: &str) -> bool {
        self.0.is_empty() || self.0 == placeholder
    }
}

impl FromStr for Secret {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<unset>")
        } else {
            f.write_str("<redacted>")
        }
    }
}

/// Effective configuration after merging all sources.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub omdb: OmdbConfig,
    pub display: DisplayConfig,
}

/// Settings for the Telegram transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TelegramConfig {
    pub token: Secret,
}

/// Settings for the OMDb client.
#[derive(Debug, Clone, PartialEq)]
pub struct OmdbConfig {
    pub api_key: Secret,
    pub base_url: Url,
    pub timeout_secs: u64,
}

/// Settings for rendering replies.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Maximum number of search results listed in one reply.
    pub max_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram: TelegramConfig {
                token: Secret::default(),
            },
            omdb: OmdbConfig {
                api_key: Secret::default(),
                base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            display: DisplayConfig {
                max_results: DEFAULT_MAX_RESULTS,
            },
        }
    }
}

/// Settings that can be given on the command line or through the
/// environment. Flattened into the top-level CLI.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Path to a TOML config file (defaults to the user config directory).
    #[arg(long, global = true, env = "MOVIEBOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Telegram bot token from @BotFather.
    #[arg(long, global = true, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub token: Option<Secret>,

    /// OMDb API key from http://www.omdbapi.com/.
    #[arg(long, global = true, env = "OMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<Secret>,

    /// OMDb endpoint.
    #[arg(long, global = true, env = "OMDB_BASE_URL")]
    pub base_url: Option<String>,

    /// Upstream request timeout in seconds.
    #[arg(long, global = true, env = "MOVIEBOT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Maximum number of search results shown per reply.
    #[arg(long, global = true, env = "MOVIEBOT_MAX_RESULTS")]
    pub max_results: Option<usize>,
}

/// On-disk representation. Every field is optional so a file can set only
/// what it needs.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    telegram: FileTelegram,
    #[serde(default)]
    omdb: FileOmdb,
    #[serde(default)]
    display: FileDisplay,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct FileTelegram {
    token: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct FileOmdb {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct FileDisplay {
    max_results: Option<usize>,
}

/// Loads, merges and validates the configuration for `purpose`.
pub fn load_config(overrides: &ConfigOverrides, purpose: Purpose) -> Result<Config> {
    let file_config = match &overrides.config {
        Some(path) => Some(load_explicit_config(path)?),
        None => load_user_config()?,
    };
    let merged = merge_configs(file_config.unwrap_or_default(), overrides)
        .context("Failed to merge configuration")?;
    validate_config(&merged, purpose).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_explicit_config(path: &Path) -> Result<FileConfig> {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
    if !expanded.is_file() {
        return Err(anyhow!(BotError::Config(format!(
            "Config file '{}' does not exist or is not a file.",
            expanded.display()
        ))));
    }
    info!("Loading configuration from: {}", expanded.display());
    load_config_from_path(&expanded)
}

fn load_user_config() -> Result<Option<FileConfig>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "moviebot", "moviebot") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join(CONFIG_FILE_NAME);
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Applies the file on top of the defaults, then the overrides on top of that.
fn merge_configs(file: FileConfig, overrides: &ConfigOverrides) -> Result<Config> {
    let mut merged = Config::default();

    if let Some(token) = overrides
        .token
        .clone()
        .or_else(|| file.telegram.token.map(Secret::new))
    {
        merged.telegram.token = token;
    }
    if let Some(key) = overrides
        .api_key
        .clone()
        .or_else(|| file.omdb.api_key.map(Secret::new))
    {
        merged.omdb.api_key = key;
    }
    if let Some(raw) = overrides.base_url.clone().or(file.omdb.base_url) {
        merged.omdb.base_url = parse_base_url(&raw)?;
    }
    if let Some(secs) = overrides.timeout_secs.or(file.omdb.timeout_secs) {
        merged.omdb.timeout_secs = secs;
    }
    if let Some(max) = overrides.max_results.or(file.display.max_results) {
        merged.display.max_results = max;
    }
    Ok(merged)
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        anyhow!(BotError::Config(format!(
            "Invalid OMDb base URL '{}': {}",
            raw, e
        )))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!(BotError::Config(format!(
            "OMDb base URL '{}' must use http or https.",
            raw
        ))));
    }
    Ok(url)
}

fn validate_config(config: &Config, purpose: Purpose) -> Result<()> {
    debug!("Validating configuration for {:?}...", purpose);
    if purpose == Purpose::Bot && config.telegram.token.is_unset(TOKEN_PLACEHOLDER) {
        return Err(anyhow!(BotError::Config(
            "TELEGRAM_BOT_TOKEN is not set. Get a bot token from @BotFather and export \
             TELEGRAM_BOT_TOKEN, pass --token, or set [telegram] token in the config file."
                .to_string()
        )));
    }
    if config.omdb.api_key.is_unset(API_KEY_PLACEHOLDER) {
        return Err(anyhow!(BotError::Config(
            "OMDB_API_KEY is not set. Get an API key from http://www.omdbapi.com/ and export \
             OMDB_API_KEY, pass --api-key, or set [omdb] api_key in the config file."
                .to_string()
        )));
    }
    if config.omdb.timeout_secs == 0 {
        return Err(anyhow!(BotError::Config(
            "timeout_secs must be at least 1.".to_string()
        )));
    }
    if config.display.max_results == 0 {
        return Err(anyhow!(BotError::Config(
            "max_results must be at least 1.".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn keys(token: &str, api_key: &str) -> ConfigOverrides {
        ConfigOverrides {
            token: Some(Secret::new(token)),
            api_key: Some(Secret::new(api_key)),
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [telegram]
            token = "123:abc"

            [omdb]
            api_key = "k3y"
            timeout_secs = 10

            [display]
            max_results = 3
        "#;

        let file: FileConfig = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(file.telegram.token.as_deref(), Some("123:abc"));
        assert_eq!(file.omdb.api_key.as_deref(), Some("k3y"));
        assert_eq!(file.omdb.base_url, None);
        assert_eq!(file.omdb.timeout_secs, Some(10));
        assert_eq!(file.display.max_results, Some(3));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = toml::from_str::<FileConfig>("[omdb]\napikey = \"typo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_apply_when_nothing_is_set() {
        let merged = merge_configs(FileConfig::default(), &ConfigOverrides::default()).unwrap();
        assert_eq!(merged.omdb.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(merged.omdb.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(merged.display.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(merged.omdb.api_key.expose(), "");
    }

    #[test]
    fn test_overrides_beat_the_file() {
        let file: FileConfig = toml::from_str(
            r#"
            [telegram]
            token = "from-file"
            [omdb]
            api_key = "file-key"
            base_url = "https://omdb.example.com/"
            timeout_secs = 10
            "#,
        )
        .unwrap();
        let overrides = ConfigOverrides {
            api_key: Some(Secret::new("flag-key")),
            timeout_secs: Some(3),
            ..Default::default()
        };

        let merged = merge_configs(file, &overrides).unwrap();
        assert_eq!(merged.telegram.token.expose(), "from-file");
        assert_eq!(merged.omdb.api_key.expose(), "flag-key");
        assert_eq!(merged.omdb.base_url.as_str(), "https://omdb.example.com/");
        assert_eq!(merged.omdb.timeout_secs, 3);
        assert_eq!(merged.display.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_invalid_base_url() {
        let overrides = ConfigOverrides {
            base_url: Some("not a url".into()),
            ..Default::default()
        };
        let err = merge_configs(FileConfig::default(), &overrides).unwrap_err();
        assert!(err.to_string().contains("Invalid OMDb base URL"));

        let overrides = ConfigOverrides {
            base_url: Some("ftp://omdb.example.com/".into()),
            ..Default::default()
        };
        assert!(merge_configs(FileConfig::default(), &overrides).is_err());
    }

    #[test]
    fn test_validate_requires_token_only_for_the_bot() {
        let merged = merge_configs(FileConfig::default(), &keys("", "k3y")).unwrap();
        assert!(validate_config(&merged, Purpose::Lookup).is_ok());

        let err = validate_config(&merged, Purpose::Bot).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
        assert!(err
            .downcast_ref::<BotError>()
            .is_some_and(BotError::is_config));
    }

    #[test]
    fn test_validate_rejects_placeholders() {
        let merged = merge_configs(
            FileConfig::default(),
            &keys(TOKEN_PLACEHOLDER, "k3y"),
        )
        .unwrap();
        assert!(validate_config(&merged, Purpose::Bot).is_err());

        let merged = merge_configs(
            FileConfig::default(),
            &keys("123:abc", API_KEY_PLACEHOLDER),
        )
        .unwrap();
        let err = validate_config(&merged, Purpose::Lookup).unwrap_err();
        assert!(err.to_string().contains("OMDB_API_KEY"));
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut merged = merge_configs(FileConfig::default(), &keys("t", "k")).unwrap();
        merged.omdb.timeout_secs = 0;
        assert!(validate_config(&merged, Purpose::Lookup).is_err());

        let mut merged = merge_configs(FileConfig::default(), &keys("t", "k")).unwrap();
        merged.display.max_results = 0;
        assert!(validate_config(&merged, Purpose::Lookup).is_err());
    }

    #[test]
    fn test_load_config_from_explicit_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("moviebot.toml");
        fs::write(&path, "[omdb]\napi_key = \"file-key\"\n[display]\nmax_results = 2\n").unwrap();

        let overrides = ConfigOverrides {
            config: Some(path),
            ..Default::default()
        };
        let cfg = load_config(&overrides, Purpose::Lookup).unwrap();
        assert_eq!(cfg.omdb.api_key.expose(), "file-key");
        assert_eq!(cfg.display.max_results, 2);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let overrides = ConfigOverrides {
            config: Some(temp_dir.path().join("nope.toml")),
            ..keys("t", "k")
        };
        let err = load_config(&overrides, Purpose::Lookup).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_secrets_are_trimmed() {
        assert_eq!(Secret::new(" k3y ").expose(), "k3y");
        assert_eq!(" 123:abc\n".parse::<Secret>().unwrap().expose(), "123:abc");

        let file: FileConfig =
            toml::from_str("[omdb]\napi_key = \"  file-key\\t\"\n").unwrap();
        let merged = merge_configs(file, &ConfigOverrides::default()).unwrap();
        assert_eq!(merged.omdb.api_key.expose(), "file-key");

        let merged = merge_configs(FileConfig::default(), &keys("   ", " k3y")).unwrap();
        assert_eq!(merged.omdb.api_key.expose(), "k3y");
        assert!(validate_config(&merged, Purpose::Bot).is_err());
    }

    #[test]
    fn test_secrets_are_redacted_in_debug_output() {
        let merged = merge_configs(FileConfig::default(), &keys("123:abc", "k3y")).unwrap();
        let printed = format!("{:?}", merged);
        assert!(!printed.contains("123:abc"));
        assert!(!printed.contains("k3y"));
        assert!(printed.contains("<redacted>"));
    }
}
