//! Collection trait for abstracting document-store operations.
//!
//! This trait defines the interface for all store operations, allowing
//! different implementations (in-memory, a remote document database) to
//! be swapped via dependency injection. It is generic over the document
//! type, so each resource gets its own typed collection.

use async_trait::async_trait;

use super::error::StoreResult;

/// A record type storable in a [`Collection`].
///
/// Documents carry their own identifier and know how to evaluate the
/// resource's listing filter, so the store never inspects their shape.
pub trait Document: Clone + Send + Sync + 'static {
    /// Per-resource listing filter. The default value matches everything.
    type Filter: Default + Send + Sync;

    /// The record's unique identifier.
    fn id(&self) -> &str;

    /// Whether the record matches a listing filter.
    fn matches(&self, filter: &Self::Filter) -> bool;
}

/// Pagination window for [`Collection::find_many`].
///
/// `offset` records are skipped and at most `limit` are returned. No
/// upper bound is enforced on `limit`. Non-numeric input never reaches
/// this type — it is rejected with an invalid-query error at the parse
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

/// Collection trait for document-store operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust and
/// allow sharing across request tasks.
///
/// # Error Handling
/// All methods return `StoreResult<T>` which wraps either the expected
/// return type or a `StoreError` describing what went wrong. Absence of
/// a record is a normal return value (`None` or a zero count), never an
/// error.
#[async_trait]
pub trait Collection<T: Document>: Send + Sync {
    /// Check whether the backing store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if the store is unhealthy but no error occurred
    /// - `Err(StoreError)` if the check itself failed
    async fn health_check(&self) -> StoreResult<bool>;

    /// Query records matching a filter.
    ///
    /// # Arguments
    /// * `filter` - Per-resource filter; the default value matches all
    /// * `page` - Pagination window applied after filtering
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Matching records, ascending by identifier
    /// * `Err(StoreError)` - If the operation fails
    async fn find_many(&self, filter: &T::Filter, page: Page) -> StoreResult<Vec<T>>;

    /// Fetch a single record by identifier.
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The record
    /// * `Ok(None)` - No record with that identifier (not an error)
    /// * `Err(StoreError)` - If the operation fails
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>>;

    /// Persist a new record.
    ///
    /// # Returns
    /// * `Ok(T)` - The stored record, including any generated identifier
    /// * `Err(StoreError::ConstraintViolation)` - If the identifier is
    ///   already taken
    /// * `Err(StoreError)` - If the operation fails
    async fn insert(&self, record: T) -> StoreResult<T>;

    /// Persist a full, already-merged record under an identifier.
    ///
    /// # Returns
    /// * `Ok(T)` - The stored record
    /// * `Err(StoreError)` - If the operation fails
    async fn update_in_place(&self, id: &str, record: T) -> StoreResult<T>;

    /// Remove a record by identifier.
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of records removed (0 or 1)
    /// * `Err(StoreError)` - If the operation fails
    async fn delete_by_id(&self, id: &str) -> StoreResult<u64>;
}
