//! Product domain types.
//!
//! A product is a catalog photo listing with image variants, site links,
//! attribution and free-form tags. The required-field rules live in
//! [`crate::schema::ProductSchema`]; the types here describe the shape of
//! a record once it has passed validation.

use serde::{Deserialize, Serialize};

use crate::db::Document;

/// A catalog product as persisted in the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, generated at creation when the caller omits it.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_description: Option<String>,
    pub likes: i64,
    pub urls: Urls,
    pub links: Links,
    pub user: UserInfo,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Image variants for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Urls {
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

/// API and site links for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
}

/// Attribution for the user who published the product photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub username: String,
}

/// A single free-form tag on a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
}

/// Filter for product listings.
///
/// An absent `tag` matches every record; a present one matches records
/// whose tag sequence contains an entry with that exact title. Tag order
/// is irrelevant for filtering.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub tag: Option<String>,
}

impl Document for Product {
    type Filter = ProductFilter;

    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match &filter.tag {
            Some(tag) => self.tags.iter().any(|t| t.title == *tag),
            None => true,
        }
    }
}

/// Partial update for a product.
///
/// Every field is optional; fields present in the patch overwrite the
/// stored value wholesale (shallow merge), fields absent are retained.
/// Edits do not re-run full schema validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub likes: Option<i64>,
    pub urls: Option<Urls>,
    pub links: Option<Links>,
    pub user: Option<UserInfo>,
    pub tags: Option<Vec<Tag>>,
}

impl ProductPatch {
    /// Apply this patch onto an existing record, field by field.
    pub fn apply(self, product: &mut Product) {
        if let Some(description) = self.description {
            product.description = Some(description);
        }
        if let Some(alt_description) = self.alt_description {
            product.alt_description = Some(alt_description);
        }
        if let Some(likes) = self.likes {
            product.likes = likes;
        }
        if let Some(urls) = self.urls {
            product.urls = urls;
        }
        if let Some(links) = self.links {
            product.links = links;
        }
        if let Some(user) = self.user {
            product.user = user;
        }
        if let Some(tags) = self.tags {
            product.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(id: &str, tags: &[&str]) -> Product {
        Product {
            id: id.to_string(),
            description: Some("a photo".to_string()),
            alt_description: None,
            likes: 3,
            urls: Urls {
                regular: "https://img.example/regular.jpg".to_string(),
                small: "https://img.example/small.jpg".to_string(),
                thumb: "https://img.example/thumb.jpg".to_string(),
            },
            links: Links {
                self_link: "https://api.example/photos/1".to_string(),
                html: "https://example.com/photos/1".to_string(),
            },
            user: UserInfo {
                id: "u1".to_string(),
                first_name: "Ada".to_string(),
                last_name: None,
                portfolio_url: None,
                username: "ada".to_string(),
            },
            tags: tags
                .iter()
                .map(|t| Tag {
                    title: t.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn filter_without_tag_matches_everything() {
        let product = sample_product("p1", &[]);
        assert!(product.matches(&ProductFilter::default()));
    }

    #[test]
    fn filter_matches_on_tag_title() {
        let product = sample_product("p1", &["sunset", "beach"]);
        let hit = ProductFilter {
            tag: Some("beach".to_string()),
        };
        let miss = ProductFilter {
            tag: Some("mountain".to_string()),
        };
        assert!(product.matches(&hit));
        assert!(!product.matches(&miss));
    }

    #[test]
    fn patch_overwrites_named_fields_and_keeps_the_rest() {
        let mut product = sample_product("p1", &["sunset"]);
        let patch = ProductPatch {
            likes: Some(10),
            description: Some("updated".to_string()),
            ..Default::default()
        };
        patch.apply(&mut product);

        assert_eq!(product.likes, 10);
        assert_eq!(product.description.as_deref(), Some("updated"));
        // Untouched fields survive the merge.
        assert_eq!(product.user.username, "ada");
        assert_eq!(product.tags.len(), 1);
    }

    #[test]
    fn links_self_field_serializes_as_self() {
        let product = sample_product("p1", &[]);
        let value = serde_json::to_value(&product).unwrap();
        assert!(value["links"]["self"].is_string());
    }
}
