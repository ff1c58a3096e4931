//! Order domain types.
//!
//! Orders carry an identifier, an optional product reference, an optional
//! status, and whatever further fields the caller supplies. No field
//! schema is enforced beyond identifier assignment at creation — the
//! asymmetry with products is deliberate.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::db::Document;

/// A purchase order as persisted in the document store.
///
/// Caller-supplied fields outside the known set ride in `fields` and are
/// flattened back into the JSON representation on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "productId", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Fields for a new order, before an identifier has been assigned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewOrder {
    pub id: Option<String>,
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewOrder {
    /// Turn the draft into a persistable order, generating an identifier
    /// when the caller did not supply one.
    pub fn into_order(self) -> Order {
        Order {
            id: self
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            product_id: self.product_id,
            status: self.status,
            fields: self.fields,
        }
    }
}

/// Filter for order listings.
///
/// `product_id` and `status` are optional and independently combinable;
/// when both are given a record must match both (logical AND).
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub product_id: Option<String>,
    pub status: Option<String>,
}

impl Document for Order {
    type Filter = OrderFilter;

    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        let product_ok = match &filter.product_id {
            Some(p) => self.product_id.as_deref() == Some(p.as_str()),
            None => true,
        };
        let status_ok = match &filter.status {
            Some(s) => self.status.as_deref() == Some(s.as_str()),
            None => true,
        };
        product_ok && status_ok
    }
}

/// Partial update for an order.
///
/// Known fields overwrite when present; unknown fields are merged into
/// the free-form map, overwriting same-named keys and inserting new ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPatch {
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl OrderPatch {
    /// Apply this patch onto an existing record (shallow merge).
    pub fn apply(self, order: &mut Order) {
        if let Some(product_id) = self.product_id {
            order.product_id = Some(product_id);
        }
        if let Some(status) = self.status {
            order.status = Some(status);
        }
        for (key, value) in self.fields {
            order.fields.insert(key, value);
        }
    }
}
