//! Configuration snapshots for diagnostics.
//!
//! A snapshot captures the effective configuration at command start so a
//! report (or a bug report) records exactly which settings produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resolve::ConfigPaths;
use crate::settings::{Config, ScorerBackend};

/// A frozen snapshot of the effective configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,

    /// Schema version of the configuration.
    pub schema_version: String,

    /// Path the config was loaded from, if any.
    #[serde(default)]
    pub config_path: Option<String>,

    /// Source of the configuration.
    pub config_source: String,

    /// Key configuration values for quick reference.
    pub summary: ConfigSummary,
}

/// Summary of key configuration values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub backend: ScorerBackend,
    pub lexicon_overlay: Option<String>,
    pub feed_timeout_secs: u64,
    pub feed_max_items: usize,
    pub history_capacity: Option<usize>,
}

impl ConfigSnapshot {
    /// Capture the effective configuration.
    pub fn capture(config: &Config, paths: &ConfigPaths) -> Self {
        ConfigSnapshot {
            timestamp: Utc::now(),
            schema_version: config.schema_version.clone(),
            config_path: paths
                .config
                .as_ref()
                .map(|p| p.display().to_string()),
            config_source: paths.source.to_string(),
            summary: ConfigSummary {
                backend: config.scorer.backend,
                lexicon_overlay: config
                    .scorer
                    .lexicon_overlay
                    .as_ref()
                    .map(|p| p.display().to_string()),
                feed_timeout_secs: config.feed.timeout_secs,
                feed_max_items: config.feed.max_items,
                history_capacity: config.history.capacity,
            },
        }
    }
}
