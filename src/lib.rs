//! # Catalog Backend
//!
//! Backend service for a small print-shop catalog, exposing products for
//! sale and purchase orders as REST resources backed by a document store.
//!
//! ## Features
//!
//! - **Products**: list with pagination and tag filtering, fetch by id,
//!   create with schema validation, shallow-merge edits, deletion
//! - **Orders**: list with `productId`/`status` filtering, create, edit,
//!   delete — no schema validation, by design
//! - **Document Store**: generic collection trait with an in-memory
//!   backend for development and tests
//! - **HTTP API**: RESTful endpoints served via Axum
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types for products and orders
//! - [`schema`]: Field-level validation and normalization at the store boundary
//! - [`db`]: Document-store abstraction, in-memory backend, factory and config
//! - [`services`]: Resource services composing the store and the schemas
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod db;
pub mod models;
pub mod schema;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
