//! Domain models for the catalog resources.
//!
//! Each resource type implements [`crate::db::Document`] so the store
//! layer can filter and key it without knowing its shape.

pub mod order;
pub mod product;

pub use order::{NewOrder, Order, OrderFilter, OrderPatch};
pub use product::{Links, Product, ProductFilter, ProductPatch, Tag, Urls, UserInfo};
