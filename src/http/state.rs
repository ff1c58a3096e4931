//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::{OrderService, ProductService};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product resource service
    pub products: Arc<ProductService>,
    /// Order resource service
    pub orders: Arc<OrderService>,
}

impl AppState {
    /// Create a new application state with the given services.
    pub fn new(products: Arc<ProductService>, orders: Arc<OrderService>) -> Self {
        Self { products, orders }
    }
}
