//! Store configuration file support.
//!
//! This module provides utilities for reading store configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::StoreError;
use super::factory::StoreKind;

/// Store configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSettings,
}

/// Store backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(rename = "kind")]
    pub kind: String,
}

impl StoreConfig {
    /// Load store configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(StoreConfig)` if the file parses
    /// * `Err(StoreError::ConfigurationError)` if it cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            StoreError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            StoreError::ConfigurationError(format!(
                "Failed to parse config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Load store configuration from the default file locations.
    ///
    /// Searches `store.toml` and `config/store.toml` relative to the
    /// working directory.
    pub fn from_default_location() -> Result<Self, StoreError> {
        for candidate in ["store.toml", "config/store.toml"] {
            if Path::new(candidate).exists() {
                return Self::from_file(candidate);
            }
        }
        Err(StoreError::ConfigurationError(
            "No store.toml found in default locations".to_string(),
        ))
    }

    /// Resolve the configured backend kind.
    pub fn store_kind(&self) -> Result<StoreKind, StoreError> {
        self.store.kind.parse().map_err(|e| {
            StoreError::ConfigurationError(format!("Invalid store kind: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_kind() {
        let config: StoreConfig = toml::from_str(
            r#"
            [store]
            kind = "local"
            "#,
        )
        .unwrap();
        assert_eq!(config.store_kind().unwrap(), StoreKind::Local);
    }

    #[test]
    fn unknown_kind_is_a_configuration_error() {
        let config: StoreConfig = toml::from_str(
            r#"
            [store]
            kind = "cloud"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.store_kind(),
            Err(StoreError::ConfigurationError(_))
        ));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let result = StoreConfig::from_file("does-not-exist.toml");
        assert!(matches!(result, Err(StoreError::ConfigurationError(_))));
    }
}
