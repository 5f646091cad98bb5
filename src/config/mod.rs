use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors during config loading
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to read config file '{path}': {source}")]
  ReadFile {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("Failed to parse config file '{path}': {source}")]
  ParseFile {
    path: PathBuf,
    source: toml::de::Error,
  },

  #[error("Invalid config: {0}")]
  Invalid(String),
}

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<String>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// Record store backend
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
  Memory,
  #[serde(rename = "rocksdb")]
  RocksDb,
  #[default]
  #[serde(rename = "dynamodb")]
  DynamoDb,
}

/// Record store configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
  #[serde(default)]
  pub backend: Backend,

  /// RocksDB data directory
  #[serde(default = "default_data_path")]
  pub data_path: String,

  /// DynamoDB endpoint override, e.g. a local emulator
  pub endpoint_url: Option<String>,

  /// AWS region override
  pub region: Option<String>,
}

fn default_data_path() -> String {
  "./data".to_string()
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      backend: Backend::default(),
      data_path: default_data_path(),
      endpoint_url: None,
      region: None,
    }
  }
}

/// Lookup service configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
  /// Name of the record table
  #[serde(default = "default_table_name")]
  pub table_name: String,

  /// Key attribute of the record table
  #[serde(default = "default_key_name")]
  pub key_name: String,

  #[serde(default)]
  pub store: StoreConfig,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_table_name() -> String {
  "Users".to_string()
}

fn default_key_name() -> String {
  "user_id".to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      table_name: default_table_name(),
      key_name: default_key_name(),
      store: StoreConfig::default(),
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
      path: path.to_path_buf(),
      source,
    })?;

    let config: Config = toml::from_str(&config_str).map_err(|source| ConfigError::ParseFile {
      path: path.to_path_buf(),
      source,
    })?;

    config.validate()?;
    Ok(config)
  }

  /// Load from `path` if given, else use defaults
  pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
    match path {
      Some(path) => Self::from_file(path),
      None => Ok(Self::default()),
    }
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.table_name.is_empty() {
      return Err(ConfigError::Invalid("table_name must not be empty".into()));
    }
    if self.key_name.is_empty() {
      return Err(ConfigError::Invalid("key_name must not be empty".into()));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_default_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.table_name, "Users");
    assert_eq!(config.key_name, "user_id");
    assert_eq!(config.store.backend, Backend::DynamoDb);
    assert_eq!(config.store.data_path, "./data");
    assert_eq!(config.log.level, "info");
    assert!(config.log.file.is_none());
  }

  #[test]
  fn test_full_config() {
    let config_str = r#"
table_name = "Profiles"
key_name = "profile_id"

[store]
backend = "rocksdb"
data_path = "/tmp/user-lookup"
region = "eu-west-1"
endpoint_url = "http://localhost:8000"

[log]
level = "debug"
file = "/tmp/user-lookup.log"
"#;

    let config: Config = toml::from_str(config_str).unwrap();
    assert_eq!(config.table_name, "Profiles");
    assert_eq!(config.key_name, "profile_id");
    assert_eq!(config.store.backend, Backend::RocksDb);
    assert_eq!(config.store.data_path, "/tmp/user-lookup");
    assert_eq!(config.store.region.as_deref(), Some("eu-west-1"));
    assert_eq!(
      config.store.endpoint_url.as_deref(),
      Some("http://localhost:8000")
    );
    assert_eq!(config.log.level, "debug");
  }

  #[test]
  fn test_backend_names() {
    for (name, backend) in [
      ("memory", Backend::Memory),
      ("rocksdb", Backend::RocksDb),
      ("dynamodb", Backend::DynamoDb),
    ] {
      let config: Config = toml::from_str(&format!("[store]\nbackend = \"{name}\"")).unwrap();
      assert_eq!(config.store.backend, backend);
    }
    assert!(toml::from_str::<Config>("[store]\nbackend = \"redis\"").is_err());
  }

  #[test]
  fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "table_name = \"Staging\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.table_name, "Staging");
  }

  #[test]
  fn test_from_file_errors() {
    let err = Config::from_file("/nonexistent/user-lookup.toml").unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "table_name = ").unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseFile { .. }));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "key_name = \"\"").unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
  }

  #[test]
  fn test_load_without_path() {
    let config = Config::load(None).unwrap();
    assert_eq!(config.table_name, "Users");
  }
}
