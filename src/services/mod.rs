//! Resource services composing the document store and the validation
//! schemas.
//!
//! Each resource type gets one service owning its collection handle.
//! Services surface absence (`None`, `false`) as normal return values;
//! only validation and store failures travel the error path.

pub mod orders;
pub mod products;

pub use orders::{OrderListOptions, OrderService};
pub use products::{ProductListOptions, ProductService};

use crate::db::StoreError;
use crate::schema::ValidationError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
