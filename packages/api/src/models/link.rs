use serde::{Deserialize, Serialize};

/// Writable link attributes, also the creation payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkBase {
    /// Display title of the link.
    pub title: String,
    /// Target URL.
    pub link: String,
    /// Icon identifier.
    pub icon: String,
    /// Accent color.
    pub color: String,
    /// Section this link belongs to.
    pub section_id: String,
}

/// A link as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Server-assigned identifier.
    pub id: String,
    #[serde(flatten)]
    pub base: LinkBase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_deserializes_wire_shape() {
        let json = r##"{
            "id": "3",
            "title": "Docs",
            "link": "https://docs.example.com",
            "icon": "file",
            "color": "#ff8800",
            "sectionId": "2"
        }"##;

        let link: Link = serde_json::from_str(json).unwrap();
        assert_eq!(link.id, "3");
        assert_eq!(link.base.section_id, "2");
        assert_eq!(link.base.link, "https://docs.example.com");
    }
}
