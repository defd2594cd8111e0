//! Configuration management for tessd.
//!
//! Loads settings from /etc/tess/config.toml or uses defaults. Every
//! field has a serde default, so a partial file is fine and a missing
//! or broken one falls back entirely.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tess_common::llm::LlmConfig;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/tess/config.toml";

/// API key environment variable, consulted when the file has none.
pub const API_KEY_ENV: &str = "TESS_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP surface. Localhost by default.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:7870".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub classifier: LlmConfig,
}

impl Config {
    /// Load from the default path.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    /// Load from a specific path, falling back to defaults on any
    /// problem. The daemon must come up even with no config at all.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Invalid config at {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("No config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Classifier config with the API key resolved from the environment
    /// when the file does not set one.
    pub fn classifier_config(&self) -> LlmConfig {
        let mut config = self.classifier.clone();
        if config.api_key.is_none() {
            config.api_key = std::env::var(API_KEY_ENV).ok();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/tess.toml"));
        assert_eq!(config.server.bind_addr, "127.0.0.1:7870");
        assert!(config.classifier.enabled);
        assert_eq!(config.classifier.model, "gpt-3.5-turbo");
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[classifier]\nmodel = \"gpt-4o-mini\"\ntimeout_secs = 3"
        )
        .unwrap();

        let config = Config::load_from(file.path());
        assert_eq!(config.classifier.model, "gpt-4o-mini");
        assert_eq!(config.classifier.timeout_secs, 3);
        assert_eq!(config.classifier.temperature, 0.7);
        assert_eq!(config.server.bind_addr, "127.0.0.1:7870");
    }

    #[test]
    fn broken_file_falls_back_entirely() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml {{").unwrap();

        let config = Config::load_from(file.path());
        assert_eq!(config.server.bind_addr, "127.0.0.1:7870");
        assert!(config.classifier.enabled);
    }
}
