use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::DEFAULT_API_URL;

/// Default per-request timeout. Generation calls wait on a language model,
/// so this is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for lyriclab.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (LYRICLAB_* prefix)
/// 3. Config file (~/.config/lyriclab/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the LyricLab API, including the `/api` prefix.
    ///
    /// Can be set via:
    /// - CLI: --api-url http://host:8000/api
    /// - ENV: LYRICLAB_API_URL
    /// - Config: api_url = "..."
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Session token to send instead of the one saved by `lyriclab login`.
    ///
    /// Can be set via:
    /// - ENV: LYRICLAB_SESSION_TOKEN
    /// - Config: session_token = "sess_..."
    #[serde(default)]
    pub session_token: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Logger options passed to twyg.
    #[serde(default)]
    pub logging: twyg::Opts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            session_token: None,
            timeout_secs: default_timeout_secs(),
            logging: twyg::Opts::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/lyriclab/config.toml
    /// Reads environment variables with LYRICLAB_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("lyriclab");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, overriding the API URL when the --api-url flag is
    /// given.
    pub fn load_with_api_url(api_url: Option<String>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(url) = api_url {
            config.api_url = url;
        }
        Ok(config)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/lyriclab/config.toml
/// - macOS: ~/Library/Application Support/lyriclab/config.toml
/// - Windows: %APPDATA%\lyriclab\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lyriclab")
        .join("config.toml")
}

/// Where `lyriclab login` keeps the session token.
///
/// Returns: ~/.local/share/lyriclab/session.json (or platform equivalent)
pub fn session_file_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lyriclab")
        .join("session.json")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# LyricLab Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (LYRICLAB_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Base URL of the LyricLab API
#
# Can also be set via:
# - CLI: lyriclab --api-url https://lyriclab.example.com/api songs list
# - Environment: LYRICLAB_API_URL=https://lyriclab.example.com/api
api_url = "http://localhost:8000/api"

# Session token override
#
# Normally `lyriclab login <session-id>` stores the token for you. Set this
# only to use a token obtained elsewhere.
#
# Can also be set via:
# - Environment: LYRICLAB_SESSION_TOKEN=sess_...
#session_token = "sess_..."

# Request timeout in seconds
timeout_secs = 120

# Logging
[logging]
coloured = true
level = "info"
report_caller = false
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8000/api");
        assert!(config.session_token.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_api_url_override() {
        let config = Config::load_with_api_url(Some("http://example.test/api".to_string()));
        assert_eq!(config.unwrap().api_url, "http://example.test/api");
    }

    #[test]
    fn test_example_config_parses() {
        let value: toml::Value = toml::from_str(example_config()).unwrap();
        assert_eq!(value["api_url"].as_str(), Some("http://localhost:8000/api"));
        assert_eq!(value["timeout_secs"].as_integer(), Some(120));
    }

    #[test]
    fn test_paths_are_under_lyriclab() {
        assert!(config_file_path().ends_with("lyriclab/config.toml"));
        assert!(session_file_path().ends_with("lyriclab/session.json"));
    }
}
