//! Application configuration
//!
//! Loaded from a TOML file (default `config/local.toml`, override the
//! location with the `CONFIG_PATH` environment variable; `ENV` overrides
//! the environment label). A missing file, unparseable TOML, or an absent
//! required field is a `ConfigError`; the process fails fast at boot
//! instead of running half-configured.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/local.toml";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected shape.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The directory holding the database file could not be created.
    #[error("failed to create storage directory {path}: {source}")]
    StorageDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment label (e.g. "dev", "prod")
    pub env: String,
    /// Path of the SQLite database file
    pub storage_path: PathBuf,
    /// HTTP server settings
    pub http_server: HttpServerConfig,
}

impl AppConfig {
    /// Load configuration from the default or `CONFIG_PATH`-named file.
    ///
    /// Also ensures the directory holding the database file exists, so
    /// storage can open its file on a fresh checkout.
    pub fn load() -> ConfigResult<Self> {
        let path = env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        if let Ok(env_label) = env::var("ENV") {
            config.env = env_label;
        }
        config.ensure_storage_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn ensure_storage_dir(&self) -> ConfigResult<()> {
        if let Some(dir) = self.storage_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| ConfigError::StorageDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_parse_full_config() {
        let file = write_config(
            r#"
            env = "dev"
            storage_path = "storage/students.db"

            [http_server]
            host = "127.0.0.1"
            port = 8082
            "#,
        );
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.env, "dev");
        assert_eq!(config.storage_path, PathBuf::from("storage/students.db"));
        assert_eq!(config.http_server.socket_addr(), "127.0.0.1:8082");
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let file = write_config(
            r#"
            env = "dev"

            [http_server]
            host = "127.0.0.1"
            port = 8082
            "#,
        );
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = AppConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
