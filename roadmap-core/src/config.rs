//! Configuration management for roadmap-issues
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (ROADMAP_*)
//! 3. Config file (~/.config/roadmap-issues/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Where the roadmap is read from
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the roadmap document
    pub roadmap: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            roadmap: PathBuf::from("ROADMAP.md"),
        }
    }
}

/// Where generated files are written
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, created if missing
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated-issues"),
        }
    }
}

/// Settings for the generated `gh` batch script
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Value passed to `gh issue create --assignee`
    pub assignee: String,

    /// Pause after this many issues
    pub batch_size: usize,

    /// Length of each pause in seconds
    pub pause_secs: u64,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            assignee: "@me".to_string(),
            batch_size: 10,
            pause_secs: 5,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub script: ScriptConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/roadmap-issues/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roadmap-issues").join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        if self.script.batch_size == 0 {
            return Err(Error::Config("script.batch_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - ROADMAP_FILE: Path to the roadmap document
    /// - ROADMAP_OUTPUT_DIR: Output directory
    pub fn with_env_overrides(self) -> Self {
        self.with_cli_overrides(
            std::env::var_os("ROADMAP_FILE").map(PathBuf::from),
            std::env::var_os("ROADMAP_OUTPUT_DIR").map(PathBuf::from),
        )
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, roadmap: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(path) = roadmap {
            self.input.roadmap = path;
        }

        if let Some(dir) = output_dir {
            self.output.dir = dir;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// `config_file` replaces the default location and must exist.
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        config_file: Option<&Path>,
        roadmap: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let base = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };

        Ok(base
            .with_env_overrides()
            .with_cli_overrides(roadmap, output_dir))
    }

    /// Link from an issue file in the output directory back to the roadmap
    pub fn roadmap_link(&self) -> String {
        let name = self
            .input
            .roadmap
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ROADMAP.md".to_string());
        format!("../{}", name)
    }
}
