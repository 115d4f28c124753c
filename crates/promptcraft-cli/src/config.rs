//! Configuration management for Promptcraft CLI
//!
//! Endpoint settings live in ~/.config/promptcraft/config.toml. Dispatch
//! settings and the theme are kept separately in the key-value storage
//! directory next to it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use promptcraft::{DispatcherConfig, APP_TITLE, DEFAULT_MAX_TOKENS, OPENROUTER_URL};

const CONFIG_DIR: &str = "promptcraft";
const CONFIG_FILE: &str = "config.toml";
const STORAGE_DIR: &str = "storage";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Origin of the proxy used in proxied mode
    #[serde(default = "default_proxy_base_url")]
    pub proxy_base_url: String,
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
    /// Sent as HTTP-Referer in direct mode
    #[serde(default = "default_app_url")]
    pub app_url: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_proxy_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_upstream_url() -> String {
    OPENROUTER_URL.to_string()
}

fn default_app_url() -> String {
    "https://github.com/promptcraft/promptcraft".to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_base_url: default_proxy_base_url(),
            upstream_url: default_upstream_url(),
            app_url: default_app_url(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Directory backing the key-value store
    pub fn storage_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(STORAGE_DIR))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig {
            upstream_url: self.upstream_url.clone(),
            proxy_base_url: self.proxy_base_url.clone(),
            app_url: self.app_url.clone(),
            app_title: APP_TITLE.to_string(),
            max_tokens: Some(self.max_tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("proxy_base_url = \"https://prompts.example.com\"\n").unwrap();

        assert_eq!(config.proxy_base_url, "https://prompts.example.com");
        assert_eq!(config.upstream_url, OPENROUTER_URL);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(
            config.dispatcher_config().proxy_url(),
            "https://prompts.example.com/api/openrouter"
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            max_tokens: 1200,
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }
}
