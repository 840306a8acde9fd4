use crate::{DEFAULT_GARBAGE_KEY, DEFAULT_LOCALE_PATH, DEFAULT_SOURCE_PATH};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedupe: Option<DedupeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct MergeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Keys stripped from the merged target; replaces the default list when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garbage_keys: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DedupeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load the application configuration from the default path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Unable to determine the config directory
    /// - Unable to read the config file (other than it not existing)
    /// - The config file contains invalid TOML
    pub fn load() -> Result<Option<Self>> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config at {}", config_path.display()))?;

        Ok(Some(config))
    }

    /// Get the path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if unable to determine the config directory
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
            Ok(PathBuf::from(config_home).join("i18n-tools").join("config.toml"))
        } else if let Some(proj_dirs) = ProjectDirs::from("", "", "i18n-tools") {
            Ok(proj_dirs.config_dir().join("config.toml"))
        } else {
            anyhow::bail!("Could not determine config directory")
        }
    }

    /// Locale file the merger writes into, unless overridden on the command line
    pub fn merge_target(&self) -> PathBuf {
        self.merge
            .as_ref()
            .and_then(|m| m.target.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCALE_PATH))
    }

    /// Temporary translations file the merger reads from
    pub fn merge_source(&self) -> PathBuf {
        self.merge
            .as_ref()
            .and_then(|m| m.source.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PATH))
    }

    pub fn garbage_keys(&self) -> Vec<String> {
        self.merge
            .as_ref()
            .and_then(|m| m.garbage_keys.clone())
            .unwrap_or_else(|| vec![DEFAULT_GARBAGE_KEY.to_string()])
    }

    /// Object file the deduplicator works on when no path argument is given
    pub fn dedupe_path(&self) -> PathBuf {
        self.dedupe
            .as_ref()
            .and_then(|d| d.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCALE_PATH))
    }
}
