//! Collection factory for dependency injection.
//!
//! This module provides utilities for creating collection instances
//! based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::collection::{Collection, Document};
use super::config::StoreConfig;
use super::error::{StoreError, StoreResult};
#[cfg(feature = "local-store")]
use super::local::LocalCollection;

/// Store backend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// In-memory local collection
    Local,
}

impl FromStr for StoreKind {
    type Err = String;

    /// Parse store kind from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("local", "memory")
    ///
    /// # Returns
    /// * `Ok(StoreKind)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown store kind: {}", s)),
        }
    }
}

impl StoreKind {
    /// Get store kind from the `STORE_KIND` environment variable,
    /// defaulting to the in-memory backend.
    pub fn from_env() -> Self {
        match std::env::var("STORE_KIND") {
            Ok(val) => val.parse().unwrap_or(Self::Local),
            Err(_) => Self::Local,
        }
    }
}

/// Factory for creating collection instances.
///
/// This factory provides a centralized way to create typed collections
/// with proper initialization and configuration. Each resource gets its
/// own collection handle; handles created from the same backend share
/// nothing unless the backend itself does.
///
/// # Example
/// ```ignore
/// use catalog_backend::db::{StoreFactory, StoreKind};
/// use catalog_backend::models::Product;
///
/// let products = StoreFactory::create::<Product>(StoreKind::Local)?;
/// ```
pub struct StoreFactory;

impl StoreFactory {
    /// Create a collection instance based on kind.
    ///
    /// # Arguments
    /// * `kind` - Backend to create the collection against
    ///
    /// # Returns
    /// * `Ok(Arc<dyn Collection<T>>)` - Boxed collection instance
    /// * `Err(StoreError)` - If creation fails or the backend feature is
    ///   not compiled in
    pub fn create<T: Document>(kind: StoreKind) -> StoreResult<Arc<dyn Collection<T>>> {
        match kind {
            StoreKind::Local => {
                #[cfg(feature = "local-store")]
                {
                    Ok(Self::create_local())
                }
                #[cfg(not(feature = "local-store"))]
                {
                    Err(StoreError::ConfigurationError(
                        "local store feature not enabled".to_string(),
                    ))
                }
            }
        }
    }

    /// Create an in-memory local collection.
    #[cfg(feature = "local-store")]
    pub fn create_local<T: Document>() -> Arc<dyn Collection<T>> {
        Arc::new(LocalCollection::new())
    }

    /// Create a collection from environment configuration.
    ///
    /// Reads `STORE_KIND` to determine which backend to use; defaults to
    /// the in-memory backend.
    pub fn from_env<T: Document>() -> StoreResult<Arc<dyn Collection<T>>> {
        Self::create(StoreKind::from_env())
    }

    /// Create a collection from a TOML configuration file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the store.toml configuration file
    pub fn from_config_file<T: Document, P: AsRef<Path>>(
        config_path: P,
    ) -> StoreResult<Arc<dyn Collection<T>>> {
        let config = StoreConfig::from_file(config_path)?;
        Self::create(config.store_kind()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Doc {
        id: String,
    }

    impl Document for Doc {
        type Filter = ();

        fn id(&self) -> &str {
            &self.id
        }

        fn matches(&self, _filter: &()) -> bool {
            true
        }
    }

    #[test]
    fn store_kind_from_str() {
        assert_eq!(StoreKind::from_str("local").unwrap(), StoreKind::Local);
        assert_eq!(StoreKind::from_str("Memory").unwrap(), StoreKind::Local);
        assert!(StoreKind::from_str("invalid").is_err());
    }

    #[tokio::test]
    async fn create_local_collection() {
        let collection = StoreFactory::create::<Doc>(StoreKind::Local).unwrap();
        assert!(collection.health_check().await.unwrap());

        let stored = collection
            .insert(Doc {
                id: "a".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(stored.id, "a");
    }
}
