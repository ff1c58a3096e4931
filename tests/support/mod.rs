//! Shared helpers for integration tests.

use serde_json::{json, Value};

/// Build a complete, valid product payload.
///
/// `id` is included only when given, so tests can exercise both the
/// generated and the caller-supplied identifier paths.
pub fn product_fields(id: Option<&str>, likes: i64, tags: &[&str]) -> Value {
    let mut fields = json!({
        "description": "sunrise over the bay",
        "likes": likes,
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
        "tags": tags.iter().map(|t| json!({"title": t})).collect::<Vec<_>>()
    });
    if let Some(id) = id {
        fields["id"] = json!(id);
    }
    fields
}
