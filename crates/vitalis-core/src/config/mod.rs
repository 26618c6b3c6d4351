//! Configuration types for the Vitalis service.
//!
//! Configuration is loaded from a TOML file (`vitalis.toml` by default,
//! overridable via the `VITALIS_CONFIG` environment variable). Every field
//! carries a serde default so a partial file, or no file at all, yields a
//! usable configuration.

pub mod auth;

use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

pub use auth::{AuthConfig, PreferredAlgorithm};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, e.g. "0.0.0.0:8080"
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Load configuration from the conventional path, falling back to defaults
/// when no file exists.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    AppConfig::from_file(&path)
}

fn config_path() -> PathBuf {
    if let Ok(p) = env::var("VITALIS_CONFIG") {
        return PathBuf::from(p);
    }
    PathBuf::from("vitalis.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_when_empty() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.server.bind, "0.0.0.0:8080");
        assert_eq!(cfg.auth.token_ttl_minutes, 1440);
        assert_eq!(cfg.auth.preferred, PreferredAlgorithm::Symmetric);
        assert!(!cfg.auth.strict);
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
bind = "127.0.0.1:9000"

[auth]
preferred = "asymmetric"
token_ttl_minutes = 60
"#
        )
        .unwrap();

        let cfg = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:9000");
        assert_eq!(cfg.auth.preferred, PreferredAlgorithm::Asymmetric);
        assert_eq!(cfg.auth.token_ttl_minutes, 60);
    }
}
