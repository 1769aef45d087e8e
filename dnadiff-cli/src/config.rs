//! Configuration handling for dnadiff CLI
//!
//! Supports loading configuration from dnadiff.toml files with CLI argument overrides.

use anyhow::{Result, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use dnadiff_core::DEFAULT_MAX_FILE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Largest FASTA file accepted, in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory mutation reports are written to
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Colour mutated bases in terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Bases per line when printing highlighted sequences
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

// Default value functions
fn default_max_file_size() -> u64 { DEFAULT_MAX_FILE_SIZE }
fn default_export_dir() -> PathBuf { PathBuf::from(".") }
fn default_true() -> bool { true }
fn default_line_width() -> usize { 60 }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            color: true,
            line_width: default_line_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                // Try to find dnadiff.toml in current directory
                let default_path = PathBuf::from("dnadiff.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: dnadiff.toml");
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        if config.output.line_width == 0 {
            anyhow::bail!("output.line_width must be greater than zero");
        }

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default configuration")
    }
}
