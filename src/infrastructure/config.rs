//! Configuration management

use crate::domain::SortOrder;
use crate::error::{Result, TagCountError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Export file read when no input is configured anywhere.
pub const DEFAULT_INPUT: &str = "userChats.json";

/// Environment variable overriding the configured input path.
pub const INPUT_ENV_VAR: &str = "TAGCOUNT_INPUT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

impl Config {
    /// Load config from an explicit file. Missing file is an error.
    ///
    /// A relative `input` is resolved against the config file's directory.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagCountError::Config(format!("Config file not found: {}", path.display()))
            } else {
                TagCountError::Io(e)
            }
        })?;

        let mut config: Config = toml::from_str(&contents)?;
        if let (Some(input), Some(dir)) = (&config.input, path.parent()) {
            if input.is_relative() {
                config.input = Some(dir.join(input));
            }
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the input path: CLI argument, then TAGCOUNT_INPUT, then the
    /// config file, then userChats.json.
    pub fn resolve_input(&self, cli_input: Option<PathBuf>) -> PathBuf {
        cli_input
            .or_else(|| std::env::var_os(INPUT_ENV_VAR).map(PathBuf::from))
            .or_else(|| self.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    /// Resolve the sort order: CLI argument, then the config file, then tag order.
    pub fn resolve_sort(&self, cli_sort: Option<SortOrder>) -> SortOrder {
        cli_sort.or(self.sort).unwrap_or_default()
    }
}
