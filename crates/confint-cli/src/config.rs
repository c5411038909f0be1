//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use confint_domain::{Method, DEFAULT_CONFIDENCE_PERCENT};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Confidence level in percent used when none is given
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Fixed number of decimals; shortest representation when unset
    #[serde(default)]
    pub precision: Option<usize>,

    /// Methods to report, by identifier; all when unset
    #[serde(default)]
    pub methods: Option<Vec<String>>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled lines
    Plain,
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".confint").join("config.toml"))
    }

    /// Load configuration from an explicit path, or from the default path.
    ///
    /// An explicit path must exist. A missing file at the default path
    /// yields the default configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => match Self::path() {
                Ok(path) => Self::load_from(&path),
                Err(e) => {
                    tracing::warn!("{}; using default settings", e);
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load configuration from a file, falling back to defaults if it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading config");
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Settings {
    /// Resolve configured method identifiers, or `None` if none are configured.
    pub fn methods(&self) -> Result<Option<Vec<Method>>> {
        let Some(names) = &self.methods else {
            return Ok(None);
        };
        if names.is_empty() {
            return Ok(None);
        }

        names
            .iter()
            .map(|name| {
                Method::parse(name)
                    .ok_or_else(|| CliError::Config(format!("Unknown method '{}'", name)))
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE_PERCENT,
            format: OutputFormat::Plain,
            color: true,
            precision: None,
            methods: None,
        }
    }
}

fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE_PERCENT
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Plain
}
