//! Business operations over the product catalog.

use std::sync::Arc;

use serde_json::Value;

use super::ServiceResult;
use crate::db::{Collection, Page};
use crate::models::{Product, ProductFilter, ProductPatch};
use crate::schema::ProductSchema;

/// Options for listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductListOptions {
    pub offset: usize,
    pub limit: usize,
    /// Match only records whose tag sequence contains this title.
    pub tag: Option<String>,
}

/// Service for the product resource.
///
/// Owns the product collection handle and the field schema; creation
/// runs validation/normalization, edits are shallow merges persisted
/// without re-validation.
pub struct ProductService {
    collection: Arc<dyn Collection<Product>>,
    schema: ProductSchema,
}

impl ProductService {
    /// Create a new product service over a collection and its schema.
    pub fn new(collection: Arc<dyn Collection<Product>>, schema: ProductSchema) -> Self {
        Self { collection, schema }
    }

    /// Check whether the backing store is reachable.
    pub async fn health_check(&self) -> ServiceResult<bool> {
        Ok(self.collection.health_check().await?)
    }

    /// List products, ascending by identifier.
    ///
    /// Returns a possibly-empty sequence, never null. When `tag` is
    /// absent the filter matches every record.
    pub async fn list(&self, options: ProductListOptions) -> ServiceResult<Vec<Product>> {
        let filter = ProductFilter { tag: options.tag };
        let page = Page {
            offset: options.offset,
            limit: options.limit,
        };
        Ok(self.collection.find_many(&filter, page).await?)
    }

    /// Fetch a single product; `None` when absent.
    pub async fn get(&self, id: &str) -> ServiceResult<Option<Product>> {
        Ok(self.collection.find_by_id(id).await?)
    }

    /// Validate, normalize and persist a new product.
    ///
    /// Fails with a validation error when required fields are missing or
    /// mistyped; otherwise returns the stored record including its
    /// (possibly generated) identifier.
    pub async fn create(&self, fields: Value) -> ServiceResult<Product> {
        let product = self.schema.validate(fields)?;
        Ok(self.collection.insert(product).await?)
    }

    /// Shallow-merge changes into an existing product.
    ///
    /// Returns `None` when the record is absent, without touching the
    /// store. Fields named in the patch overwrite; all others survive.
    pub async fn edit(&self, id: &str, patch: ProductPatch) -> ServiceResult<Option<Product>> {
        let Some(mut product) = self.get(id).await? else {
            return Ok(None);
        };

        patch.apply(&mut product);
        let updated = self.collection.update_in_place(id, product).await?;
        Ok(Some(updated))
    }

    /// Remove a product; `true` when a record was deleted, `false` when
    /// there was nothing to delete.
    pub async fn destroy(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.collection.delete_by_id(id).await? > 0)
    }
}
