//! # Asset
//!
//! An interoperability asset (portal, service, solution) attached to a
//! binding requirement, either inline or by reference id.
//!
//! ## Alias Pairs
//!
//! Two naming variants exist for the same two slots:
//!
//! | Slot | First-declared | Alternate |
//! |------|----------------|-----------|
//! | display name | `name` | `title` |
//! | location URI | `landing_page` | `url` |
//!
//! Exactly one key of each pair is emitted. When both members of a pair
//! hold a non-empty value the first-declared one wins and the other is
//! dropped from the payload.

use serde_json::Value;

use crate::entity::{put_non_empty, put_set, serialize_via_payload, Entity, FieldSlot, Payload};

/// Inline asset, serialized as the object form of the `Asset` schema
/// component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Asset {
    id: Option<String>,
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    landing_page: Option<String>,
    url: Option<String>,
}

impl Asset {
    /// The display name as it will be serialized: `name` if non-empty,
    /// else `title`.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.name).or_else(|| non_empty(&self.title))
    }

    /// Free-text description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The location URI as it will be serialized: `landing_page` if
    /// non-empty, else `url`.
    pub fn location(&self) -> Option<&str> {
        non_empty(&self.landing_page).or_else(|| non_empty(&self.url))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Entity for Asset {
    const SCHEMA_NAME: &'static str = "Asset";
    const FIELDS: &'static [&'static str] = &["name", "title", "description", "landingPage", "url"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn field_slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "id" => Some(FieldSlot::Text(&mut self.id)),
            "name" => Some(FieldSlot::Text(&mut self.name)),
            "title" => Some(FieldSlot::Text(&mut self.title)),
            "description" => Some(FieldSlot::Text(&mut self.description)),
            "landingPage" => Some(FieldSlot::Text(&mut self.landing_page)),
            "url" => Some(FieldSlot::Text(&mut self.url)),
            _ => None,
        }
    }

    fn to_payload(&self) -> Payload {
        let mut out = Payload::new();
        if !put_non_empty(&mut out, "name", &self.name) {
            put_non_empty(&mut out, "title", &self.title);
        }
        put_set(&mut out, "description", &self.description);
        if !put_non_empty(&mut out, "landing_page", &self.landing_page) {
            put_non_empty(&mut out, "url", &self.url);
        }
        out
    }
}

serialize_via_payload!(Asset);

/// One element of a binding requirement's asset list, as read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetEntry<'a> {
    /// Asset described in the payload itself.
    Inline(&'a Asset),
    /// Id of an asset that already exists on the receiving side.
    Reference(&'a str),
}

impl<'a> AssetEntry<'a> {
    /// Payload value: the reference string verbatim, or the inline object.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Inline(asset) => Value::Object(asset.to_payload()),
            Self::Reference(id) => Value::String((*id).to_string()),
        }
    }

    /// The inline asset, if this entry is not a reference.
    pub fn as_inline(&self) -> Option<&'a Asset> {
        match *self {
            Self::Inline(asset) => Some(asset),
            Self::Reference(_) => None,
        }
    }

    /// The reference id, if this entry is a reference.
    pub fn as_reference(&self) -> Option<&'a str> {
        match *self {
            Self::Inline(_) => None,
            Self::Reference(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(asset: &Asset) -> Vec<String> {
        asset.to_payload().keys().cloned().collect()
    }

    #[test]
    fn test_title_and_landing_page_pair() {
        let mut asset = Asset::default();
        asset
            .set("title", "Portal EU")
            .unwrap()
            .set("description", "An EU portal interoperable solution")
            .unwrap()
            .set("landing_page", "https://portal.example.eu")
            .unwrap();

        assert_eq!(keys(&asset), ["title", "description", "landing_page"]);
        assert_eq!(
            serde_json::to_value(&asset).unwrap(),
            json!({
                "title": "Portal EU",
                "description": "An EU portal interoperable solution",
                "landing_page": "https://portal.example.eu",
            })
        );
    }

    #[test]
    fn test_name_and_url_pair() {
        let mut asset = Asset::default();
        asset.set("name", "Portal EU").unwrap();
        asset.set("url", "https://portal.example.eu").unwrap();
        assert_eq!(keys(&asset), ["name", "url"]);
    }

    #[test]
    fn test_first_declared_alias_wins() {
        let mut asset = Asset::default();
        asset.set("title", "Title").unwrap();
        asset.set("name", "Name").unwrap();
        asset.set("url", "https://b.example").unwrap();
        asset.set("landingPage", "https://a.example").unwrap();

        assert_eq!(
            serde_json::to_value(&asset).unwrap(),
            json!({"name": "Name", "landing_page": "https://a.example"})
        );
        assert_eq!(asset.display_name(), Some("Name"));
        assert_eq!(asset.location(), Some("https://a.example"));
    }

    #[test]
    fn test_empty_alias_falls_through_to_alternate() {
        let mut asset = Asset::default();
        asset.set("name", "").unwrap();
        asset.set("title", "Title").unwrap();
        assert_eq!(keys(&asset), ["title"]);
    }

    #[test]
    fn test_entry_values() {
        let reference = AssetEntry::Reference("a0e76022-863e-4f8f-8eb0-8227cd080be4");
        assert_eq!(reference.to_value(), json!("a0e76022-863e-4f8f-8eb0-8227cd080be4"));
        assert!(reference.as_inline().is_none());

        let asset = Asset::default();
        let inline = AssetEntry::Inline(&asset);
        assert_eq!(inline.to_value(), json!({}));
        assert!(inline.as_reference().is_none());
    }
}
