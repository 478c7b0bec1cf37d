//! Runtime settings.
//!
//! Settings come from three layers, highest priority first: command-line
//! flags, an optional TOML config file, built-in defaults.
//!
//! ```toml
//! design = 2
//! week_start = "monday"
//! catalog = "designs.toml"
//! log_level = "debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use clap::ValueEnum;
use estimate_core::models::DesignId;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::GlobalArgs;

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of the optional config file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub design: Option<u8>,
    pub week_start: Option<WeekStart>,
    pub catalog: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn from_toml_str(
        document: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(document).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&document, path)
    }
}

/// Fully resolved settings used by the commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub design: DesignId,
    pub week_start: WeekStart,
    /// Catalog file to use instead of the bundled design sets.
    pub catalog: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            design: DesignId::default(),
            week_start: WeekStart::default(),
            catalog: None,
            log_level: "warn".to_string(),
        }
    }
}

/// Maps the `-v` count onto a log level.
pub fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

impl Settings {
    /// Layers command-line flags over the config file over defaults.
    pub fn resolve(
        args: &GlobalArgs,
        file: FileConfig,
    ) -> Self {
        let defaults = Self::default();

        Self {
            design: args
                .design
                .or(file.design)
                .map(DesignId)
                .unwrap_or(defaults.design),
            week_start: file.week_start.unwrap_or(defaults.week_start),
            catalog: args.catalog.clone().or(file.catalog),
            log_level: level_for_verbosity(args.verbose)
                .map(str::to_string)
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Reads the config file named by `--config` (if any) and resolves.
    pub fn load(args: &GlobalArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(args, file))
    }
}
