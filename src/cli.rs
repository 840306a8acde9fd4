use crate::app_config::AppConfig;
use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Flags shared by every binary
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LogArgs {
    /// Enable debug output (shows INFO and DEBUG messages)
    #[arg(long)]
    pub debug: bool,

    /// Enable trace output (shows all log messages including TRACE)
    #[arg(long)]
    pub trace: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "merge-translations",
    about = "Fill empty entries of a locale file from a temporary translations file",
    long_about = "Fill empty entries of a locale file from a temporary translations file.

For every key of the source file:
  • an empty value in the target is replaced by a non-empty source value
  • a key missing from the target is added
  • a translated value in the target is never overwritten

Garbage keys (file_path by default) are removed afterwards and the target is
rewritten in place with two-space indentation. No backup is taken.

Defaults:
  • target: i18n/zh-cn.json
  • source: temp_translations.json

Both can be set in $XDG_CONFIG_HOME/i18n-tools/config.toml under [merge].",
    version
)]
pub struct MergeCli {
    /// Locale file to update in place
    #[arg(short, long, env = "I18N_TARGET", value_hint = clap::ValueHint::FilePath)]
    pub target: Option<PathBuf>,

    /// File supplying the new translations
    #[arg(short, long, env = "I18N_SOURCE", value_hint = clap::ValueHint::FilePath)]
    pub source: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "autoremove",
    about = "Remove duplicate keys from a JSON object file, keeping the last occurrence",
    long_about = "Remove duplicate keys from a JSON object file, keeping the last occurrence.

The file is rewritten with four-space indentation only when duplicates were
found; otherwise it is left untouched.

Exit status is 0 on success (changed or not) and 2 on any error.",
    version
)]
pub struct DedupeCli {
    /// Path to a JSON object file to dedupe (default: i18n/zh-cn.json)
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "seed-terms",
    about = "Add newly discovered UI terms to a locale file as empty entries",
    long_about = "Add newly discovered UI terms to a locale file as empty entries.

TERMS is a plain-text file with one candidate string per line. Candidates that
do not look like translatable UI text (URLs, numbers, markup, logos, very long
strings) are skipped. Existing keys keep their values.",
    version
)]
pub struct SeedCli {
    /// Plain-text file with one term per line
    #[arg(value_name = "TERMS", value_hint = clap::ValueHint::FilePath)]
    pub terms: PathBuf,

    /// Locale file to add the terms to
    #[arg(short, long, env = "I18N_TARGET", value_hint = clap::ValueHint::FilePath)]
    pub target: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Initialize tracing with the specified debug/trace flags
pub fn initialize_tracing(log: LogArgs) {
    let log_level = if log.trace {
        Level::TRACE
    } else if log.debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::builder().with_default_directive(log_level.into()).from_env_lossy())
        .init();
}

/// Load the optional config file, falling back to built-in defaults
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn load_app_config() -> Result<AppConfig> {
    let app_config = AppConfig::load().context("Failed to load app configuration")?;

    if app_config.is_some() {
        debug!("Loaded app configuration from: {}", AppConfig::config_path()?.display());
    } else {
        debug!("No app configuration file found, using defaults");
    }

    Ok(app_config.unwrap_or_default())
}
