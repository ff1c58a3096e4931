//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! matching resource-service operation. Failures travel the uniform
//! error funnel in [`super::error`]; absence results are mapped to 404
//! locally and never enter it.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::dto::{
    parse_page, DeleteOrderResponse, HealthResponse, OrderListQuery, ProductListQuery,
};
use super::error::{not_found, AppError};
use super::state::AppState;
use crate::models::{NewOrder, Order, OrderPatch, Product, ProductPatch};
use crate::services::{OrderListOptions, ProductListOptions};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Root & Health
// =============================================================================

/// GET /
///
/// Serve the fixed landing page from the static directory.
pub async fn handle_root() -> Response {
    let dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    match tokio::fs::read_to_string(format!("{dir}/index.html")).await {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to serve landing page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the store
/// is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store = match state.products.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        store,
    }))
}

// =============================================================================
// Products
// =============================================================================

/// GET /products
///
/// List products with pagination and optional tag filtering.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> HandlerResult<Vec<Product>> {
    let page = parse_page(query.offset.as_deref(), query.limit.as_deref())?;

    let products = state
        .products
        .list(ProductListOptions {
            offset: page.offset,
            limit: page.limit,
            tag: query.tag,
        })
        .await?;

    Ok(Json(products))
}

/// GET /products/{id}
///
/// Get a single product; 404 when absent.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.products.get(&id).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(not_found("Product")),
    }
}

/// POST /products
///
/// Create a product from the caller's fields; 201 with the stored record.
pub async fn create_product(
    State(state): State<AppState>,
    Json(fields): Json<Value>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = state.products.create(fields).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id}
///
/// Shallow-merge changes into a product; 404 when absent.
pub async fn edit_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<ProductPatch>,
) -> Result<Response, AppError> {
    match state.products.edit(&id, changes).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(not_found("Product")),
    }
}

/// DELETE /products/{id}
///
/// Delete a product; 204 on success, 404 when there was nothing to
/// delete.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if state.products.destroy(&id).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(not_found("Product"))
    }
}

// =============================================================================
// Orders
// =============================================================================

/// GET /orders
///
/// List orders with pagination and optional `productId`/`status`
/// filtering.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> HandlerResult<Vec<Order>> {
    let page = parse_page(query.offset.as_deref(), query.limit.as_deref())?;

    let orders = state
        .orders
        .list(OrderListOptions {
            offset: page.offset,
            limit: page.limit,
            product_id: query.product_id,
            status: query.status,
        })
        .await?;

    Ok(Json(orders))
}

/// POST /orders
///
/// Create an order from the caller's fields, responding with the single
/// created record.
pub async fn create_order(
    State(state): State<AppState>,
    Json(draft): Json<NewOrder>,
) -> HandlerResult<Order> {
    let order = state.orders.create(draft).await?;
    Ok(Json(order))
}

/// PUT /orders/{id}
///
/// Shallow-merge changes into an order. An absent id yields a JSON
/// `null` body, not a 404.
pub async fn edit_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<OrderPatch>,
) -> HandlerResult<Option<Order>> {
    let order = state.orders.edit(&id, changes).await?;
    Ok(Json(order))
}

/// DELETE /orders/{id}
///
/// Delete an order, reporting success regardless of prior existence.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<DeleteOrderResponse> {
    state.orders.destroy(&id).await?;
    Ok(Json(DeleteOrderResponse { success: true }))
}
