//! # Organisation
//!
//! Public organisation acting as the provider of an Assessment.

use crate::entity::{put_set, serialize_via_payload, Entity, FieldSlot, Payload};

/// Public organisation, serialized as the `Organisation` schema component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organisation {
    id: Option<String>,
    name: Option<String>,
    organisation_type: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    country: Option<String>,
}

impl Organisation {
    /// Display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Organisation category code, e.g. `local_public_sector_body`.
    pub fn organisation_type(&self) -> Option<&str> {
        self.organisation_type.as_deref()
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl Entity for Organisation {
    const SCHEMA_NAME: &'static str = "Organisation";
    const FIELDS: &'static [&'static str] = &["name", "organisationType", "country"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn field_slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "id" => Some(FieldSlot::Text(&mut self.id)),
            "name" => Some(FieldSlot::Text(&mut self.name)),
            "organisationType" => Some(FieldSlot::Text(&mut self.organisation_type)),
            "country" => Some(FieldSlot::Text(&mut self.country)),
            _ => None,
        }
    }

    fn to_payload(&self) -> Payload {
        let mut out = Payload::new();
        put_set(&mut out, "name", &self.name);
        put_set(&mut out, "organisation_type", &self.organisation_type);
        put_set(&mut out, "country", &self.country);
        out
    }
}

serialize_via_payload!(Organisation);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use serde_json::json;

    #[test]
    fn test_empty_organisation_serializes_empty() {
        assert!(Organisation::default().to_payload().is_empty());
    }

    #[test]
    fn test_both_key_spellings_hit_the_same_field() {
        let mut snake = Organisation::default();
        snake.set("organisation_type", "local_public_sector_body").unwrap();
        let mut camel = Organisation::default();
        camel.set("organisationType", "local_public_sector_body").unwrap();

        assert_eq!(snake, camel);
        assert_eq!(
            serde_json::Value::Object(snake.to_payload()),
            json!({"organisation_type": "local_public_sector_body"})
        );
    }

    #[test]
    fn test_chained_assignment() {
        let mut org = Organisation::default();
        org.set("name", "City of Brussels")
            .and_then(|o| o.set("organisation_type", "local_public_sector_body"))
            .and_then(|o| o.set("country", "BE"))
            .unwrap();

        let payload = org.to_payload();
        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "organisation_type", "country"]);
        assert_eq!(org.country(), Some("BE"));
    }

    #[test]
    fn test_unknown_key_is_rejected_in_strict_mode() {
        let mut org = Organisation::default();
        let err = org.set("organisation_typo", "x").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownField {
                entity: "Organisation",
                key: "organisation_typo".to_string(),
            }
        );
        assert!(org.to_payload().is_empty());
    }

    #[test]
    fn test_unknown_key_is_ignored_in_lenient_mode() {
        let mut org = Organisation::default();
        org.set_lenient("organisation_typo", "x")
            .set_lenient("name", "Org");
        assert_eq!(
            serde_json::Value::Object(org.to_payload()),
            json!({"name": "Org"})
        );
    }

    #[test]
    fn test_id_is_settable_but_never_serialized() {
        let mut org = Organisation::default();
        org.set_id("b21e876e-8ad0-4057-ad57-de45c51d374f");
        assert_eq!(org.id(), Some("b21e876e-8ad0-4057-ad57-de45c51d374f"));
        assert!(org.to_payload().is_empty());

        org.set("id", "other").unwrap();
        assert_eq!(org.id(), Some("other"));
    }

    #[test]
    fn test_field_names_in_payload_order() {
        assert_eq!(Organisation::field_names(), ["name", "organisationType", "country"]);
    }

    #[test]
    fn test_accepts_reports_known_keys() {
        assert!(Organisation::accepts("organisation_type"));
        assert!(Organisation::accepts("organisationType"));
        assert!(Organisation::accepts("id"));
        assert!(!Organisation::accepts("thematic_area"));
    }
}
