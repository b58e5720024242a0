use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    aggregation::aggregate::CUSTOM_PERM_TEMPLATE_ID,
    locale::catalog::{Language, Translations},
};

pub const DEFAULT_CONFIG_PATH: &str = "perm-aggregate.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "perm-aggregate",
    version,
    about = "Summarize, compare and serialize permission selections"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: perm-aggregate.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an aggregate from a JSON payload and print its summary
    Summarize {
        /// Path to the aggregation payload (JSON)
        #[arg(long)]
        payload: String,

        /// Display language: zh-cn or en (overrides config)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Flatten a JSON document into a query string
    Query {
        /// Path to the JSON document
        #[arg(long)]
        input: String,

        /// Key prefix for the top-level value
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Deep-compare two JSON documents
    Compare {
        left: String,
        right: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

/// Optional YAML config file: `perm-aggregate.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub language: Language,

    #[serde(default = "default_custom_template_id")]
    pub custom_template_id: Value,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog overrides, namespace -> key -> text
    #[serde(default)]
    pub translations: Translations,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            custom_template_id: default_custom_template_id(),
            logging: LoggingConfig::default(),
            translations: Translations::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    /// compact | pretty | json
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

// Serde default helpers
fn default_custom_template_id() -> Value { Value::from(CUSTOM_PERM_TEMPLATE_ID) }
fn default_level() -> String { "warn".to_string() }
fn default_format() -> String { "compact".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file, surfacing read and parse failures.
pub fn try_load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    try_load_config(path.unwrap_or(DEFAULT_CONFIG_PATH)).unwrap_or_default()
}

/// `-v` flags take precedence over the configured level.
pub fn resolve_log_level(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
