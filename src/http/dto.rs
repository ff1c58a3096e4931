//! Data Transfer Objects for the HTTP API.
//!
//! Query-string shapes, pagination parsing, and the few response bodies
//! that are not domain records.

use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::db::Page;

/// Records skipped when the caller omits `offset`.
pub const DEFAULT_OFFSET: usize = 0;
/// Records returned when the caller omits `limit`.
pub const DEFAULT_LIMIT: usize = 25;

/// Query parameters for product listings.
///
/// `offset` and `limit` arrive as raw strings so that non-numeric input
/// surfaces as an invalid-query failure instead of a silent coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Query parameters for order listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListQuery {
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default, rename = "productId")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Response for order deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteOrderResponse {
    pub success: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Store connection status
    pub store: String,
}

/// Parse pagination query parameters, applying the defaults.
///
/// # Returns
/// * `Ok(Page)` - Parsed window
/// * `Err(AppError::InvalidQuery)` - A parameter was present but not a
///   non-negative number
pub fn parse_page(offset: Option<&str>, limit: Option<&str>) -> Result<Page, AppError> {
    Ok(Page {
        offset: parse_param("offset", offset, DEFAULT_OFFSET)?,
        limit: parse_param("limit", limit, DEFAULT_LIMIT)?,
    })
}

fn parse_param(name: &str, raw: Option<&str>, default: usize) -> Result<usize, AppError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            AppError::InvalidQuery(format!(
                "query parameter `{name}` must be a number, got `{raw}`"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let page = parse_page(None, None).unwrap();
        assert_eq!(page.offset, DEFAULT_OFFSET);
        assert_eq!(page.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn numeric_values_parse() {
        let page = parse_page(Some("3"), Some("7")).unwrap();
        assert_eq!(page.offset, 3);
        assert_eq!(page.limit, 7);
    }

    #[test]
    fn non_numeric_offset_is_rejected() {
        let err = parse_page(Some("abc"), None).unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
    }

    #[test]
    fn negative_limit_is_rejected() {
        let err = parse_page(None, Some("-1")).unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
    }
}
