//! Typed configuration structs for sentiment.json.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::validate::{ValidationError, ValidationResult};

/// Which scorer backend produces compound scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerBackend {
    /// Built-in lexicon scorer (no artifacts required).
    #[default]
    Lexicon,

    /// Pre-trained linear model plus persisted vectorizer.
    Model,
}

impl std::fmt::Display for ScorerBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScorerBackend::Lexicon => write!(f, "lexicon"),
            ScorerBackend::Model => write!(f, "model"),
        }
    }
}

/// Scorer selection and artifact paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerSettings {
    /// Active backend.
    pub backend: ScorerBackend,

    /// Optional JSON word→valence overlay merged over the built-in lexicon.
    pub lexicon_overlay: Option<PathBuf>,

    /// Model artifact path (required when backend = model).
    pub model_path: Option<PathBuf>,

    /// Vectorizer artifact path (required when backend = model).
    pub vectorizer_path: Option<PathBuf>,
}

/// Feed fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Request timeout in seconds. No retries happen on timeout.
    pub timeout_secs: u64,

    /// Maximum number of headlines taken from one feed.
    pub max_items: usize,

    /// User-Agent header sent with feed requests.
    pub user_agent: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        FeedSettings {
            timeout_secs: 10,
            max_items: 20,
            user_agent: format!("headline-sentiment/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// History store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Optional record capacity; when full the oldest record is dropped.
    /// `None` keeps the original unbounded behavior.
    pub capacity: Option<usize>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema version of this config file.
    pub schema_version: String,

    pub scorer: ScorerSettings,
    pub feed: FeedSettings,
    pub history: HistorySettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            scorer: ScorerSettings::default(),
            feed: FeedSettings::default(),
            history: HistorySettings::default(),
        }
    }
}

impl Config {
    /// Load and parse a config file.
    pub fn from_file(path: &Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| ValidationError::ParseError(format!("{}: {}", path.display(), e)))
    }

    /// Resolve, load, and validate configuration.
    ///
    /// With no config file anywhere in the resolution chain, built-in
    /// defaults are used. A file that exists but fails to parse or validate
    /// is an error, never silently ignored.
    pub fn load(cli_path: Option<&Path>) -> ValidationResult<(Self, crate::ConfigPaths)> {
        let paths = crate::resolve_config(cli_path);
        let config = match &paths.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        crate::validate_config(&config)?;
        Ok((config, paths))
    }
}
