//! Record validation and normalization at the store boundary.
//!
//! Each resource that enforces field rules gets an explicit schema struct
//! handed to its service at construction time — there is no ambient
//! global registry. A schema takes the caller's raw JSON and either
//! produces a normalized record (defaults applied, identifier generated)
//! or fails with a [`ValidationError`] naming the offending field path
//! and the rule it violated.
//!
//! Validation runs at create time only. Edits persist the merged fields
//! as-is without re-running the full schema.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::{Links, Product, Tag, Urls, UserInfo};

/// Validation failure: which field, which rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("field `{0}` is required")]
    Required(String),

    /// A field is present but has the wrong type.
    #[error("field `{0}` must be a {1}")]
    WrongType(String, &'static str),
}

/// Field rules for the product resource.
///
/// Required: `likes`, `urls.{regular,small,thumb}`, `links.{self,html}`,
/// `user.{id,first_name,username}`. Optional: `description`,
/// `alt_description`, `user.{last_name,portfolio_url}`, `tags` (defaults
/// to empty; each entry requires a string `title`). A missing `id` is
/// filled with a freshly generated UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductSchema;

impl ProductSchema {
    /// Validate and normalize candidate product fields.
    ///
    /// # Arguments
    /// * `fields` - Raw JSON supplied by the caller
    ///
    /// # Returns
    /// * `Ok(Product)` - Normalized record ready for insertion
    /// * `Err(ValidationError)` - First required-but-missing or
    ///   wrong-type rule violated, with the field path
    pub fn validate(&self, fields: Value) -> Result<Product, ValidationError> {
        let root = match fields.as_object() {
            Some(obj) => obj,
            None => return Err(ValidationError::WrongType("product".to_string(), "object")),
        };

        let id = optional_string(root, "", "id")?
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let urls = require_object(root, "", "urls")?;
        let links = require_object(root, "", "links")?;
        let user = require_object(root, "", "user")?;

        Ok(Product {
            id,
            description: optional_string(root, "", "description")?,
            alt_description: optional_string(root, "", "alt_description")?,
            likes: require_integer(root, "", "likes")?,
            urls: Urls {
                regular: require_string(urls, "urls", "regular")?,
                small: require_string(urls, "urls", "small")?,
                thumb: require_string(urls, "urls", "thumb")?,
            },
            links: Links {
                self_link: require_string(links, "links", "self")?,
                html: require_string(links, "links", "html")?,
            },
            user: UserInfo {
                id: require_string(user, "user", "id")?,
                first_name: require_string(user, "user", "first_name")?,
                last_name: optional_string(user, "user", "last_name")?,
                portfolio_url: optional_string(user, "user", "portfolio_url")?,
                username: require_string(user, "user", "username")?,
            },
            tags: validate_tags(root)?,
        })
    }
}

fn field_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn require_string(
    obj: &Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<String, ValidationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(ValidationError::Required(field_path(prefix, key))),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType(
            field_path(prefix, key),
            "string",
        )),
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<Option<String>, ValidationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::WrongType(
            field_path(prefix, key),
            "string",
        )),
    }
}

fn require_integer(
    obj: &Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<i64, ValidationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(ValidationError::Required(field_path(prefix, key))),
        Some(value) => value.as_i64().ok_or_else(|| {
            ValidationError::WrongType(field_path(prefix, key), "number")
        }),
    }
}

fn require_object<'a>(
    obj: &'a Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(ValidationError::Required(field_path(prefix, key))),
        Some(Value::Object(nested)) => Ok(nested),
        Some(_) => Err(ValidationError::WrongType(
            field_path(prefix, key),
            "object",
        )),
    }
}

fn validate_tags(root: &Map<String, Value>) -> Result<Vec<Tag>, ValidationError> {
    let items = match root.get("tags") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::WrongType("tags".to_string(), "array")),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let entry = item.as_object().ok_or_else(|| {
                ValidationError::WrongType(format!("tags[{i}]"), "object")
            })?;
            Ok(Tag {
                title: require_string(entry, &format!("tags[{i}]"), "title")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_fields() -> Value {
        json!({
            "description": "sunrise over the bay",
            "likes": 3,
            "urls": {
                "regular": "https://img.example/r.jpg",
                "small": "https://img.example/s.jpg",
                "thumb": "https://img.example/t.jpg"
            },
            "links": {
                "self": "https://api.example/photos/1",
                "html": "https://example.com/photos/1"
            },
            "user": {
                "id": "u1",
                "first_name": "Ada",
                "username": "ada"
            },
            "tags": [{"title": "sunrise"}, {"title": "bay"}]
        })
    }

    #[test]
    fn valid_record_normalizes_and_generates_id() {
        let product = ProductSchema.validate(valid_fields()).unwrap();
        assert!(!product.id.is_empty());
        assert_eq!(product.likes, 3);
        assert_eq!(product.tags.len(), 2);
        assert_eq!(product.user.last_name, None);
    }

    #[test]
    fn supplied_id_is_preserved() {
        let mut fields = valid_fields();
        fields["id"] = json!("p-42");
        let product = ProductSchema.validate(fields).unwrap();
        assert_eq!(product.id, "p-42");
    }

    #[test]
    fn two_generated_ids_differ() {
        let a = ProductSchema.validate(valid_fields()).unwrap();
        let b = ProductSchema.validate(valid_fields()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn missing_likes_is_required_error() {
        let mut fields = valid_fields();
        fields.as_object_mut().unwrap().remove("likes");
        let err = ProductSchema.validate(fields).unwrap_err();
        assert_eq!(err, ValidationError::Required("likes".to_string()));
    }

    #[test]
    fn string_likes_is_wrong_type() {
        let mut fields = valid_fields();
        fields["likes"] = json!("three");
        let err = ProductSchema.validate(fields).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType("likes".to_string(), "number")
        );
    }

    #[test]
    fn missing_nested_url_names_the_full_path() {
        let mut fields = valid_fields();
        fields["urls"].as_object_mut().unwrap().remove("small");
        let err = ProductSchema.validate(fields).unwrap_err();
        assert_eq!(err, ValidationError::Required("urls.small".to_string()));
    }

    #[test]
    fn missing_username_names_the_full_path() {
        let mut fields = valid_fields();
        fields["user"].as_object_mut().unwrap().remove("username");
        let err = ProductSchema.validate(fields).unwrap_err();
        assert_eq!(err, ValidationError::Required("user.username".to_string()));
    }

    #[test]
    fn tag_without_title_names_the_entry() {
        let mut fields = valid_fields();
        fields["tags"] = json!([{"title": "ok"}, {}]);
        let err = ProductSchema.validate(fields).unwrap_err();
        assert_eq!(err, ValidationError::Required("tags[1].title".to_string()));
    }

    #[test]
    fn tags_default_to_empty() {
        let mut fields = valid_fields();
        fields.as_object_mut().unwrap().remove("tags");
        let product = ProductSchema.validate(fields).unwrap();
        assert!(product.tags.is_empty());
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = ProductSchema.validate(json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType("product".to_string(), "object")
        );
    }

    #[test]
    fn error_messages_name_field_and_rule() {
        assert_eq!(
            ValidationError::Required("urls.thumb".to_string()).to_string(),
            "field `urls.thumb` is required"
        );
        assert_eq!(
            ValidationError::WrongType("likes".to_string(), "number").to_string(),
            "field `likes` must be a number"
        );
    }
}
