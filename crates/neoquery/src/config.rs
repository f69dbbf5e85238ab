// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Where the database lives and how to open it.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{NeoError, Result};

/// Database file path, overrides the config file.
pub const DB_ENV: &str = "NEO_DB";
/// Path of a YAML config file.
pub const CONFIG_ENV: &str = "NEO_CONFIG";

/// Connection descriptor for the DuckDB store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database: PathBuf,
    #[serde(default)]
    pub read_only: bool,
}

impl StoreConfig {
    pub fn new<P: Into<PathBuf>>(database: P) -> Self {
        Self {
            database: database.into(),
            read_only: false,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Load a YAML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        let config: StoreConfig = serde_yaml_ng::from_str(yaml)?;
        if config.database.as_os_str().is_empty() {
            return Err(NeoError::NotConfigured(
                "config file has an empty 'database'".to_string(),
            ));
        }
        Ok(config)
    }

    /// Resolve the store from an explicit path, then `NEO_DB`, then the
    /// file named by `NEO_CONFIG`.
    pub fn from_env_with_override(override_path: Option<PathBuf>) -> Result<Self> {
        resolve(
            override_path,
            env::var(DB_ENV).ok(),
            env::var(CONFIG_ENV).ok(),
        )
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    db_env: Option<String>,
    config_env: Option<String>,
) -> Result<StoreConfig> {
    if let Some(path) = override_path {
        return Ok(StoreConfig::new(path));
    }
    if let Some(path) = db_env.filter(|p| !p.is_empty()) {
        return Ok(StoreConfig::new(path));
    }
    if let Some(file) = config_env.filter(|p| !p.is_empty()) {
        return StoreConfig::load(file);
    }
    Err(NeoError::NotConfigured(format!(
        "pass --database or set {} or {}",
        DB_ENV, CONFIG_ENV
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() -> Result<()> {
        let config = resolve(
            Some(PathBuf::from("a.duckdb")),
            Some("b.duckdb".to_string()),
            None,
        )?;
        assert_eq!(config.database, PathBuf::from("a.duckdb"));
        assert!(!config.read_only);
        Ok(())
    }

    #[test]
    fn test_env_before_config_file() -> Result<()> {
        let config = resolve(None, Some("b.duckdb".to_string()), Some("missing.yaml".to_string()))?;
        assert_eq!(config.database, PathBuf::from("b.duckdb"));
        Ok(())
    }

    #[test]
    fn test_config_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("neo.yaml");
        std::fs::write(&file, "database: /data/neo.duckdb\nread_only: true\n")?;

        let config = resolve(None, None, Some(file.to_string_lossy().to_string()))?;
        assert_eq!(config, StoreConfig::new("/data/neo.duckdb").read_only(true));
        Ok(())
    }

    #[test]
    fn test_read_only_defaults_to_false() -> Result<()> {
        let config = StoreConfig::parse("database: neo.duckdb")?;
        assert!(!config.read_only);
        Ok(())
    }

    #[test]
    fn test_not_configured() {
        assert!(matches!(resolve(None, None, None), Err(NeoError::NotConfigured(_))));
        assert!(matches!(
            resolve(None, Some(String::new()), None),
            Err(NeoError::NotConfigured(_))
        ));
        assert!(matches!(
            StoreConfig::parse("database: ''"),
            Err(NeoError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(StoreConfig::parse("read_only: true"), Err(NeoError::Config(_))));
    }
}
