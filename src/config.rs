//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/propsift/config.toml` (XDG) or platform config dir
//! 3. Project config: `.propsift.toml`
//! 4. Environment variables: `PROPSIFT_*`, nested keys split on `__`
//!
//! # Example
//!
//! ```toml
//! [output]
//! format = "toon"
//! pretty = false
//! separator = "."
//! ```
//!
//! The same settings from the environment:
//! `PROPSIFT_OUTPUT__FORMAT=toon PROPSIFT_OUTPUT__SEPARATOR=/`.

use std::ops::Deref;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::output::OutputFormat;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".propsift.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PROPSIFT_";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Report rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: `json`, `toon` or `text`.
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Separator used to join property locations into paths.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_pretty() -> bool {
    true
}

/// Default location separator.
pub fn default_separator() -> String {
    ".".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
            separator: default_separator(),
        }
    }
}

impl OutputConfig {
    /// Check settings that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.separator.is_empty() {
            return Err(AppError::InvalidSetting(
                "output.separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Self::user_config_path())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the provider stack with an explicit user config path.
    pub fn figment(user_config: PathBuf) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            // Layer 1: User config
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(PROJECT_CONFIG_FILE))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// User config path: ~/.config/propsift/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("propsift").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("propsift").join("config.toml"))
            .unwrap_or_default()
    }
}
