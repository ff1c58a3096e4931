//! Document store module for catalog data.
//!
//! This module provides the store abstraction via a generic collection
//! trait, allowing different backing stores to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Resource Services (services/) - Business Logic         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Collection Trait (collection.rs) - Abstract Interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │              Local Collection                 │
//!     │                (in-memory)                    │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The module includes:
//! - `collection`: Trait definition for store operations, generic over a
//!   document type
//! - `local`: In-memory implementation for unit testing and local
//!   development
//! - `factory`: Factory for creating collection instances
//! - `config`: TOML configuration file support for backend selection
//!
//! Every operation is a single attempt against the backing collection;
//! failures propagate as [`StoreError`] with no retries at this layer.

#[cfg(not(feature = "local-store"))]
compile_error!("Enable at least one document-store backend feature.");

pub mod collection;
pub mod config;
pub mod error;
pub mod factory;
#[cfg(feature = "local-store")]
pub mod local;

pub use collection::{Collection, Document, Page};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use factory::{StoreFactory, StoreKind};
#[cfg(feature = "local-store")]
pub use local::LocalCollection;
