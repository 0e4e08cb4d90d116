use anyhow::{Context, Result};
use pathbench_core::RandomGraphConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default output format
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Settings read from `config.toml`; command-line flags take precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputFormat,
    /// Tracing filter used when `RUST_LOG` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    /// Treat adjacency-matrix files as directed
    pub directed: bool,
    /// Treat non-zero matrix entries as weights
    pub weighted: bool,
    /// Defaults for `--random` graphs and `generate`
    pub generator: RandomGraphConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Table,
            log_filter: None,
            directed: false,
            weighted: true,
            generator: RandomGraphConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = Self::resolve_path(path);

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("invalid configuration in {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = Self::resolve_path(path);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        Ok(())
    }

    pub fn resolve_path(path: Option<&str>) -> PathBuf {
        match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path(),
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pathbench")
            .join("config.toml")
    }
}
