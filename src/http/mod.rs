//! HTTP server module for the catalog backend.
//!
//! This module provides an axum-based HTTP server that exposes the
//! catalog as a REST API. It reuses the service layer, the collection
//! trait, and the domain models from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing, pagination defaults                   │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, uniform error funnel                │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Validation, shallow merges, filters                    │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Store Layer (db/)                                        │
//! │  - Collection trait / LocalCollection                     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
