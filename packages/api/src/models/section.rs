use serde::{Deserialize, Serialize};

/// Writable section attributes, also the creation payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBase {
    /// Display title of the section.
    pub title: String,
    /// Shelf this section belongs to.
    pub shelf_id: String,
}

/// A section as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Server-assigned identifier.
    pub id: String,
    #[serde(flatten)]
    pub base: SectionBase,
}
