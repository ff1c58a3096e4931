//! Business operations over purchase orders.
//!
//! Unlike products, orders carry no field schema: create and edit pass
//! the caller's fields straight through to the store, with only an
//! identifier assigned on create. The asymmetry mirrors the product
//! decision for this resource and is intentional.

use std::sync::Arc;

use super::ServiceResult;
use crate::db::{Collection, Page};
use crate::models::{NewOrder, Order, OrderFilter, OrderPatch};

/// Options for listing orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListOptions {
    pub offset: usize,
    pub limit: usize,
    /// Match only orders referencing this product.
    pub product_id: Option<String>,
    /// Match only orders in this status.
    pub status: Option<String>,
}

/// Service for the order resource.
pub struct OrderService {
    collection: Arc<dyn Collection<Order>>,
}

impl OrderService {
    /// Create a new order service over a collection.
    pub fn new(collection: Arc<dyn Collection<Order>>) -> Self {
        Self { collection }
    }

    /// Check whether the backing store is reachable.
    pub async fn health_check(&self) -> ServiceResult<bool> {
        Ok(self.collection.health_check().await?)
    }

    /// List orders, ascending by identifier.
    ///
    /// `product_id` and `status` combine with logical AND when both are
    /// given; either alone narrows independently.
    pub async fn list(&self, options: OrderListOptions) -> ServiceResult<Vec<Order>> {
        let filter = OrderFilter {
            product_id: options.product_id,
            status: options.status,
        };
        let page = Page {
            offset: options.offset,
            limit: options.limit,
        };
        Ok(self.collection.find_many(&filter, page).await?)
    }

    /// Persist a new order, assigning an identifier when absent.
    pub async fn create(&self, draft: NewOrder) -> ServiceResult<Order> {
        Ok(self.collection.insert(draft.into_order()).await?)
    }

    /// Shallow-merge changes into an existing order.
    ///
    /// Returns `None` when the record is absent, without touching the
    /// store. No field validation is applied to the changes.
    pub async fn edit(&self, id: &str, patch: OrderPatch) -> ServiceResult<Option<Order>> {
        let Some(mut order) = self.collection.find_by_id(id).await? else {
            return Ok(None);
        };

        patch.apply(&mut order);
        let updated = self.collection.update_in_place(id, order).await?;
        Ok(Some(updated))
    }

    /// Remove an order; `true` when a record was deleted.
    pub async fn destroy(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.collection.delete_by_id(id).await? > 0)
    }
}
