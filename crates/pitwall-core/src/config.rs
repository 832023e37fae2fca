//! Configuration management for the pit wall.
//!
//! Loads configuration from ${PITWALL_HOME}/config.toml with sensible defaults.
//! The file is only ever read; nothing here writes to disk.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::calendar::{Calendar, RaceEvent};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for pit wall configuration.
    //!
    //! PITWALL_HOME resolution order:
    //! 1. PITWALL_HOME environment variable (if set)
    //! 2. ~/.config/pitwall (default)
    //! 3. ./.pitwall when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the pit wall home directory.
    pub fn pitwall_home() -> PathBuf {
        if let Ok(home) = std::env::var("PITWALL_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("pitwall"))
            .unwrap_or_else(|| PathBuf::from(".pitwall"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        pitwall_home().join("config.toml")
    }
}

/// Forwarding of unknown commands to the OS shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub enabled: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Headline feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// RSS 2.0 feed URL
    pub url: String,
    /// Maximum headlines shown
    pub limit: usize,
    pub timeout_secs: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            url: "https://news.google.com/rss/search?q=Formula+1+racing&hl=en-US&gl=US&ceid=US:en"
                .to_string(),
            limit: 10,
            timeout_secs: 15,
        }
    }
}

impl NewsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Speed test endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Small GET used for latency samples
    pub ping_url: String,
    /// GET endpoint; `{bytes}` is replaced with `download_bytes`
    pub download_url: String,
    /// POST endpoint receiving `upload_bytes` of payload
    pub upload_url: String,
    pub download_bytes: u64,
    pub upload_bytes: u64,
    pub ping_samples: u32,
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ping_url: "https://speed.cloudflare.com/__down?bytes=0".to_string(),
            download_url: "https://speed.cloudflare.com/__down?bytes={bytes}".to_string(),
            upload_url: "https://speed.cloudflare.com/__up".to_string(),
            download_bytes: 25_000_000,
            upload_bytes: 10_000_000,
            ping_samples: 3,
            timeout_secs: 60,
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Download URL with the byte count filled in.
    pub fn download_url(&self) -> String {
        self.download_url
            .replace("{bytes}", &self.download_bytes.to_string())
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name shown in the prompt
    pub driver: String,

    /// Play the start-lights sequence on launch
    pub boot: bool,

    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub news: NewsConfig,

    #[serde(default)]
    pub probe: ProbeConfig,

    /// Replaces the built-in calendar when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub calendar: Vec<RaceEvent>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            driver: default_driver(),
            boot: true,
            shell: ShellConfig::default(),
            news: NewsConfig::default(),
            probe: ProbeConfig::default(),
            calendar: Vec::new(),
        }
    }
}

/// Login name in upper case, or "DRIVER".
fn default_driver() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .map(|name| name.trim().to_uppercase())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "DRIVER".to_string())
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Effective calendar: the configured one, or the built-in season.
    pub fn calendar(&self) -> Calendar {
        if self.calendar.is_empty() {
            Calendar::default()
        } else {
            Calendar::new(self.calendar.clone())
        }
    }

    /// Effective config rendered as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
