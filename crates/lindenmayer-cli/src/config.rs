//! CLI configuration management.
//!
//! Values come from, in increasing precedence: built-in defaults, the config
//! file, then environment variables (a `.env` file is honored).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// How sentences are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare sentence.
    #[default]
    Plain,
    /// A JSON object with axiom, generation, rules and sentence.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown format: {}. Use 'plain' or 'json'", s),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generations to expand when neither the command line nor the description says.
    pub default_generations: usize,

    /// Output format when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_generations: 4,
            format: OutputFormat::Plain,
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env()?;

        Ok(config)
    }

    /// Read a config file. Missing keys take their default.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Override values with `LSYS_*` environment variables.
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(generations) = std::env::var("LSYS_GENERATIONS") {
            self.default_generations = generations
                .parse()
                .with_context(|| format!("Invalid LSYS_GENERATIONS: {}", generations))?;
        }
        if let Ok(format) = std::env::var("LSYS_FORMAT") {
            self.format = format.parse()?;
        }
        Ok(())
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            self.save_to(&config_path)?;
        }
        Ok(())
    }

    /// Save to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "lindenmayer", "lsys")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}
