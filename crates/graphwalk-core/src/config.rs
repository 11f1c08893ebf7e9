//! Layered configuration for graphwalk.
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. A TOML file (`graphwalk.toml` unless another path is given)
//! 3. Environment variables prefixed `GRAPHWALK_`, with `__` between
//!    section and key (e.g. `GRAPHWALK_SHELL__PROMPT`)
//!
//! # Example
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [shell]
//! prompt = "g> "
//! format = "json"
//! load_default = true
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "graphwalk.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHWALK_";

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// How traversal traces and listings are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines and tables.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level filter handed to the tracing subscriber. `RUST_LOG` wins.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// `[shell]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// REPL prompt.
    pub prompt: String,
    /// Colourise output.
    pub color: bool,
    /// Output format at start-up.
    pub format: OutputFormat,
    /// Load the default dataset before the first command.
    pub load_default: bool,
    /// File used to persist line-editor history between sessions.
    pub history_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "graphwalk> ".to_string(),
            color: true,
            format: OutputFormat::Text,
            load_default: false,
            history_file: None,
        }
    }
}

/// Complete graphwalk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphwalkConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Interactive shell settings.
    pub shell: ShellConfig,
}

impl GraphwalkConfig {
    /// Builds the provider stack for `path` (or the default file).
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads and validates the configuration.
    ///
    /// A missing file is not an error; its layer is simply empty.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            if !p.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
        }
        Self::from_figment(&Self::figment(path))
    }

    /// Extracts and validates the configuration from a figment.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document on top of the defaults, ignoring the environment.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let figment =
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(source));
        Self::from_figment(&figment)
    }

    /// Checks values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }
        if self.shell.prompt.trim().is_empty() {
            return Err(Error::Config("shell.prompt cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
