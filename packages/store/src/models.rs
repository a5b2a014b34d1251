//! # Wire model for shelves
//!
//! Defines the shelf record as the backend serves it. The split mirrors the
//! server's API schema:
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`ShelfBase`] | The writable attributes of a shelf. This is the complete request body when creating or updating a shelf; the server never accepts an `id` from the client. |
//! | [`Shelf`] | A persisted shelf: a server-assigned `id` plus the flattened [`ShelfBase`] attributes. |
//!
//! Field names on the wire are camelCase (`userId`), so both structs carry
//! `#[serde(rename_all = "camelCase")]` and `Shelf` flattens its base to match
//! the backend's embedded-struct encoding.

use serde::{Deserialize, Serialize};

/// Writable shelf attributes, also the creation payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfBase {
    /// Display title of the shelf.
    pub title: String,
    /// URL path segment the shelf is served under.
    pub path: String,
    /// Domain the shelf belongs to.
    pub domain: String,
    /// Free-form description shown on the shelf page.
    pub description: String,
    /// Visual theme identifier.
    pub theme: String,
    /// Icon identifier.
    pub icon: String,
    /// Owning user's id.
    pub user_id: String,
}

/// A shelf as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    /// Server-assigned identifier.
    pub id: String,
    #[serde(flatten)]
    pub base: ShelfBase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_deserializes_wire_shape() {
        let json = r#"{
            "id": "66b2f1c0a3",
            "title": "Reading list",
            "path": "reading",
            "domain": "example.com",
            "description": "Long reads",
            "theme": "dark",
            "icon": "book",
            "userId": "u-1"
        }"#;

        let shelf: Shelf = serde_json::from_str(json).unwrap();
        assert_eq!(shelf.id, "66b2f1c0a3");
        assert_eq!(shelf.base.title, "Reading list");
        assert_eq!(shelf.base.user_id, "u-1");
    }

    #[test]
    fn test_shelf_base_serializes_camel_case() {
        let base = ShelfBase {
            title: "Reading list".into(),
            user_id: "u-1".into(),
            ..ShelfBase::default()
        };

        let json = serde_json::to_value(&base).unwrap();
        assert_eq!(json["title"], "Reading list");
        assert_eq!(json["userId"], "u-1");
        assert!(json.get("user_id").is_none());
    }
}
