//! # Affected Public Service
//!
//! A public service impacted by a binding requirement.

use crate::entity::{put_set, serialize_via_payload, Entity, FieldSlot, Payload};

/// Public service affected by a binding requirement, serialized as the
/// `AffectedService` schema component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffectedService {
    id: Option<String>,
    name: Option<String>,
    thematic_area: Option<String>,
}

impl AffectedService {
    /// Service name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Thematic area code, e.g. `education_and_research`.
    pub fn thematic_area(&self) -> Option<&str> {
        self.thematic_area.as_deref()
    }
}

impl Entity for AffectedService {
    const SCHEMA_NAME: &'static str = "AffectedService";
    const FIELDS: &'static [&'static str] = &["name", "thematicArea"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn field_slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "id" => Some(FieldSlot::Text(&mut self.id)),
            "name" => Some(FieldSlot::Text(&mut self.name)),
            "thematicArea" => Some(FieldSlot::Text(&mut self.thematic_area)),
            _ => None,
        }
    }

    fn to_payload(&self) -> Payload {
        let mut out = Payload::new();
        put_set(&mut out, "name", &self.name);
        put_set(&mut out, "thematic_area", &self.thematic_area);
        out
    }
}

serialize_via_payload!(AffectedService);
