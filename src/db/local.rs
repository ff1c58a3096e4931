//! In-memory local collection implementation.
//!
//! This module provides a local implementation of the collection trait
//! suitable for unit testing and local development. All data is stored in
//! memory in an ordered map keyed by record identifier, providing fast,
//! deterministic, and isolated execution.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::collection::{Collection, Document, Page};
use super::error::{StoreError, StoreResult};

/// In-memory local collection.
///
/// Records live in a `BTreeMap` keyed by identifier, so iteration order
/// is ascending by id — the ordering contract of `find_many` falls out
/// of the storage layout. Clones share the same underlying data.
#[derive(Clone)]
pub struct LocalCollection<T: Document> {
    data: Arc<RwLock<LocalData<T>>>,
}

struct LocalData<T> {
    documents: BTreeMap<String, T>,

    // Connection health, toggleable from tests
    is_healthy: bool,
}

impl<T: Document> LocalCollection<T> {
    /// Create a new empty local collection.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                documents: BTreeMap::new(),
                is_healthy: true,
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all records from the collection.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.documents.clear();
    }

    /// Get the number of records stored.
    pub fn len(&self) -> usize {
        self.data.read().unwrap().documents.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> StoreResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(StoreError::ConnectionError(
                "store is not reachable".to_string(),
            ));
        }
        Ok(())
    }
}

impl<T: Document> Default for LocalCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> Collection<T> for LocalCollection<T> {
    async fn health_check(&self) -> StoreResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn find_many(&self, filter: &T::Filter, page: Page) -> StoreResult<Vec<T>> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        // BTreeMap iteration is ascending by id already.
        Ok(data
            .documents
            .values()
            .filter(|record| record.matches(filter))
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.documents.get(id).cloned())
    }

    async fn insert(&self, record: T) -> StoreResult<T> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        let id = record.id().to_string();
        if data.documents.contains_key(&id) {
            return Err(StoreError::ConstraintViolation(format!(
                "duplicate id `{id}`"
            )));
        }

        data.documents.insert(id, record.clone());
        Ok(record)
    }

    async fn update_in_place(&self, id: &str, record: T) -> StoreResult<T> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        // Save-by-id semantics: the record is written under `id` whether
        // or not it still exists, so concurrent edits are last-writer-wins.
        data.documents.insert(id.to_string(), record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        Ok(u64::from(data.documents.remove(id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Doc {
        id: String,
        label: String,
    }

    #[derive(Default)]
    struct DocFilter {
        label: Option<String>,
    }

    impl Document for Doc {
        type Filter = DocFilter;

        fn id(&self) -> &str {
            &self.id
        }

        fn matches(&self, filter: &DocFilter) -> bool {
            match &filter.label {
                Some(label) => self.label == *label,
                None => true,
            }
        }
    }

    fn doc(id: &str, label: &str) -> Doc {
        Doc {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    async fn seeded() -> LocalCollection<Doc> {
        let collection = LocalCollection::new();
        for (id, label) in [
            ("a", "red"),
            ("b", "blue"),
            ("c", "red"),
            ("d", "blue"),
            ("e", "red"),
        ] {
            collection.insert(doc(id, label)).await.unwrap();
        }
        collection
    }

    #[tokio::test]
    async fn health_check_reflects_toggled_state() {
        let collection: LocalCollection<Doc> = LocalCollection::new();
        assert!(collection.health_check().await.unwrap());

        collection.set_healthy(false);
        assert!(!collection.health_check().await.unwrap());
        assert!(matches!(
            collection.find_by_id("a").await,
            Err(StoreError::ConnectionError(_))
        ));
    }

    #[tokio::test]
    async fn insert_and_find_by_id() {
        let collection = LocalCollection::new();
        let stored = collection.insert(doc("a", "red")).await.unwrap();
        assert_eq!(stored.id, "a");

        let found = collection.find_by_id("a").await.unwrap();
        assert_eq!(found, Some(doc("a", "red")));
        assert_eq!(collection.find_by_id("zz").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_insert_is_a_constraint_violation() {
        let collection = LocalCollection::new();
        collection.insert(doc("a", "red")).await.unwrap();
        let err = collection.insert(doc("a", "blue")).await.unwrap_err();
        assert!(matches!(err, StoreError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn find_many_orders_by_id_and_paginates() {
        let collection = seeded().await;

        let page = collection
            .find_many(
                &DocFilter::default(),
                Page {
                    offset: 1,
                    limit: 2,
                },
            )
            .await
            .unwrap();

        let ids: Vec<&str> = page.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn find_many_applies_filter_before_pagination() {
        let collection = seeded().await;

        let reds = collection
            .find_many(
                &DocFilter {
                    label: Some("red".to_string()),
                },
                Page {
                    offset: 1,
                    limit: 10,
                },
            )
            .await
            .unwrap();

        let ids: Vec<&str> = reds.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "e"]);
    }

    #[tokio::test]
    async fn find_many_with_offset_past_the_end_is_empty() {
        let collection = seeded().await;
        let page = collection
            .find_many(
                &DocFilter::default(),
                Page {
                    offset: 100,
                    limit: 10,
                },
            )
            .await
            .unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn update_in_place_overwrites_the_record() {
        let collection = LocalCollection::new();
        collection.insert(doc("a", "red")).await.unwrap();

        let updated = collection
            .update_in_place("a", doc("a", "green"))
            .await
            .unwrap();
        assert_eq!(updated.label, "green");
        assert_eq!(
            collection.find_by_id("a").await.unwrap().unwrap().label,
            "green"
        );
        assert_eq!(collection.len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_removed_count() {
        let collection = LocalCollection::new();
        collection.insert(doc("a", "red")).await.unwrap();

        assert_eq!(collection.delete_by_id("a").await.unwrap(), 1);
        // Second delete of the same id reports absence, not failure.
        assert_eq!(collection.delete_by_id("a").await.unwrap(), 0);
        assert!(collection.is_empty());
    }
}
