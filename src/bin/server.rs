//! Catalog HTTP Server Binary
//!
//! This is the main entry point for the catalog REST API server.
//! It initializes the document store, builds the resource services,
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory store (default)
//! cargo run --bin catalog-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `STORE_KIND`: Store backend (default: local); overridden by
//!   `store.toml` when present
//! - `STATIC_DIR`: Directory holding the landing page (default: static)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use catalog_backend::db::{StoreConfig, StoreFactory, StoreKind};
use catalog_backend::http::{create_router, AppState};
use catalog_backend::schema::ProductSchema;
use catalog_backend::services::{OrderService, ProductService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting catalog HTTP server");

    // Config file wins over the environment when present.
    let kind = match StoreConfig::from_default_location() {
        Ok(config) => config.store_kind()?,
        Err(_) => StoreKind::from_env(),
    };

    let products = ProductService::new(StoreFactory::create(kind)?, ProductSchema);
    let orders = OrderService::new(StoreFactory::create(kind)?);
    info!("Document store initialized");

    // Create application state and router
    let state = AppState::new(Arc::new(products), Arc::new(orders));
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
