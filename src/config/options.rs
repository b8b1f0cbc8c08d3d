// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::ConfigError;

/// Everything a run can be tuned with. Loaded from an optional TOML file;
/// command-line flags are applied on top.
///
/// ```toml
/// [fetch]
/// timeout_secs = 30
///
/// [output]
/// format = "csv"
/// both_columns = true
///
/// [log]
/// file = "/tmp/cricstat.log"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub output: OutputOptions,
    pub log: LogOptions,
}

impl AppOptions {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchOptions {
    /// Scheme and host, no trailing slash.
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout_secs: TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
            OutputFormat::Text | OutputFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Print the results page URL under the heading (text format).
    pub show_url: bool,
    /// Show unfiltered next to filtered values instead of filtered only.
    pub both_columns: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_url: true,
            both_columns: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogOptions {
    /// Log file; `None` logs to stderr.
    pub file: Option<PathBuf>,
    /// Fallback filter when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from(LOG_FILE)),
            filter: s!(LOG_FILTER),
        }
    }
}
