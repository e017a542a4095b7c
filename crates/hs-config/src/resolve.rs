//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI argument → environment variables → XDG path →
//! system path → built-in defaults.

use std::path::{Path, PathBuf};

/// Discovered configuration file path.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Path to sentiment.json (or None if not found).
    pub config: Option<PathBuf>,

    /// Source of the config (for diagnostics).
    pub source: ConfigSource,
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Found in /etc/headline-sentiment/.
    SystemConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::SystemConfig => write!(f, "system config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable names.
const ENV_CONFIG_PATH: &str = "HS_CONFIG";
const ENV_CONFIG_DIR: &str = "HS_CONFIG_DIR";

/// Standard config file name.
const CONFIG_FILENAME: &str = "sentiment.json";

/// Application name for XDG directories.
const APP_NAME: &str = "headline-sentiment";

/// Resolve the configuration path using the standard resolution order.
///
/// 1. Explicit CLI path (if provided)
/// 2. HS_CONFIG environment variable (direct path)
/// 3. HS_CONFIG_DIR environment variable + filename
/// 4. XDG config directory (~/.config/headline-sentiment/)
/// 5. System config (/etc/headline-sentiment/)
/// 6. Built-in defaults (None)
pub fn resolve_config(cli_path: Option<&Path>) -> ConfigPaths {
    // 1. CLI argument
    if let Some(path) = cli_path {
        if path.exists() {
            return ConfigPaths {
                config: Some(path.to_path_buf()),
                source: ConfigSource::CliArgument,
            };
        }
    }

    // 2. Environment variable (direct path)
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return ConfigPaths {
                config: Some(path),
                source: ConfigSource::Environment,
            };
        }
    }

    // 3. Environment variable (config dir)
    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(CONFIG_FILENAME);
        if path.exists() {
            return ConfigPaths {
                config: Some(path),
                source: ConfigSource::Environment,
            };
        }
    }

    // 4. XDG config directory
    if let Some(xdg_config) = dirs::config_dir() {
        let path = xdg_config.join(APP_NAME).join(CONFIG_FILENAME);
        if path.exists() {
            return ConfigPaths {
                config: Some(path),
                source: ConfigSource::XdgConfig,
            };
        }
    }

    // 5. System config
    let system_path = PathBuf::from("/etc").join(APP_NAME).join(CONFIG_FILENAME);
    if system_path.exists() {
        return ConfigPaths {
            config: Some(system_path),
            source: ConfigSource::SystemConfig,
        };
    }

    // 6. Built-in default
    ConfigPaths::default()
}

/// Get the XDG config directory for headline-sentiment.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the system config directory.
pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::CliArgument), "CLI argument");
        assert_eq!(
            format!("{}", ConfigSource::Environment),
            "environment variable"
        );
        assert_eq!(
            format!("{}", ConfigSource::BuiltinDefault),
            "builtin default"
        );
    }

    #[test]
    fn test_cli_path_wins() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let paths = resolve_config(Some(file.path()));
        assert_eq!(paths.source, ConfigSource::CliArgument);
        assert_eq!(paths.config.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_cli_path_falls_through() {
        let paths = resolve_config(Some(Path::new("/nonexistent/sentiment.json")));
        assert_ne!(paths.source, ConfigSource::CliArgument);
    }

    #[test]
    fn test_system_config_dir() {
        assert_eq!(
            system_config_dir(),
            PathBuf::from("/etc/headline-sentiment")
        );
    }
}
