//! Configuration loading for cts.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at `~/.config/cts/config.toml`.

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::error::CtsError;
use crate::strategy::{OutputFormat, ScanStrategy};

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Tag file to query, relative paths are searched from the working directory
    #[serde(default = "default_tag_file")]
    pub tag_file: String,

    /// Walk up parent directories when a relative tag file is not found
    #[serde(default = "default_search_parents")]
    pub search_parents: bool,

    /// Scanner used when the command line does not pick one
    #[serde(default)]
    pub strategy: ScanStrategy,

    /// Prefix matching for the indexed strategy
    #[serde(default)]
    pub prefix: bool,

    /// Case-insensitive matching
    #[serde(default)]
    pub ignore_case: bool,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tag_file() -> String {
    "tags".to_string()
}

fn default_search_parents() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tag_file: default_tag_file(),
            search_parents: default_search_parents(),
            strategy: ScanStrategy::default(),
            prefix: false,
            ignore_case: false,
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/cts/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (CTS_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, CtsError> {
        let config_dir = ProjectDirs::from("", "", "cts")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("tag_file", default_tag_file())
            .map_err(|e| CtsError::Config(e.to_string()))?
            .set_default("search_parents", default_search_parents())
            .map_err(|e| CtsError::Config(e.to_string()))?
            .set_default("strategy", ScanStrategy::default().as_str())
            .map_err(|e| CtsError::Config(e.to_string()))?
            .set_default("prefix", false)
            .map_err(|e| CtsError::Config(e.to_string()))?
            .set_default("ignore_case", false)
            .map_err(|e| CtsError::Config(e.to_string()))?
            .set_default("format", OutputFormat::default().as_str())
            .map_err(|e| CtsError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| CtsError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // CTS_TAG_FILE, CTS_IGNORE_CASE, ... (keys contain underscores, so
        // nesting uses a double separator)
        builder = builder.add_source(
            Environment::with_prefix("CTS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| CtsError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CtsError::Config(e.to_string()))
    }

    /// Expand `~/` in the tag file path to the home directory
    pub fn expanded_tag_file(&self) -> PathBuf {
        if let Some(rest) = self.tag_file.strip_prefix("~/") {
            if let Some(dirs) = BaseDirs::new() {
                return dirs.home_dir().join(rest);
            }
        }
        PathBuf::from(&self.tag_file)
    }
}
