//! Configuration management for tripmemo
//!
//! Config stored at: ~/.config/tripmemo/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use tripmemo_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Memo number prefix (memo numbers read PREFIX-NNN)
    #[serde(default = "default_memo_prefix")]
    pub memo_prefix: String,

    /// Invoice number prefix
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_memo_prefix() -> String {
    "SVS".to_string()
}

fn default_invoice_prefix() -> String {
    "INV".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            output_format: default_output_format(),
            memo_prefix: default_memo_prefix(),
            invoice_prefix: default_invoice_prefix(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tripmemo");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }
        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tripmemo");
        Ok(store_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Reset to defaults and save
    pub fn reset() -> Result<Self> {
        let config = Config::default();
        config.save()?;
        Ok(config)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Current configuration:")?;
        match self.store_dir {
            Some(ref dir) => writeln!(f, "  Store dir:      {}", dir.display())?,
            None => writeln!(f, "  Store dir:      (default)")?,
        }
        writeln!(f, "  Output format:  {}", self.output_format)?;
        writeln!(f, "  Memo prefix:    {}", self.memo_prefix)?;
        write!(f, "  Invoice prefix: {}", self.invoice_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes() {
        let config = Config::default();
        assert_eq!(config.memo_prefix, "SVS");
        assert_eq!(config.invoice_prefix, "INV");
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_store_dir_override_wins() {
        let config = Config {
            store_dir: Some(PathBuf::from("/tmp/tripmemo-test")),
            ..Config::default()
        };
        assert_eq!(
            config.store_dir().unwrap(),
            PathBuf::from("/tmp/tripmemo-test")
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"memo_prefix": "ABC"}"#).unwrap();
        assert_eq!(config.memo_prefix, "ABC");
        assert_eq!(config.invoice_prefix, "INV");
    }
}
