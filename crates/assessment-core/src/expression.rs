//! # Expression
//!
//! A legal or policy expression a binding requirement is derived from.

use crate::entity::{put_set, serialize_via_payload, Entity, FieldSlot, Payload};

/// Legal or policy expression, serialized as the `Expression` schema
/// component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    /// URI of the document the expression is published in.
    documented_in: Option<String>,
}

impl Expression {
    /// Expression name, e.g. the title of a legal act.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Free-text description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// URI of the publishing document.
    pub fn documented_in(&self) -> Option<&str> {
        self.documented_in.as_deref()
    }
}

impl Entity for Expression {
    const SCHEMA_NAME: &'static str = "Expression";
    const FIELDS: &'static [&'static str] = &["name", "description", "documentedIn"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn field_slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "id" => Some(FieldSlot::Text(&mut self.id)),
            "name" => Some(FieldSlot::Text(&mut self.name)),
            "description" => Some(FieldSlot::Text(&mut self.description)),
            "documentedIn" => Some(FieldSlot::Text(&mut self.documented_in)),
            _ => None,
        }
    }

    fn to_payload(&self) -> Payload {
        let mut out = Payload::new();
        put_set(&mut out, "name", &self.name);
        put_set(&mut out, "description", &self.description);
        put_set(&mut out, "documented_in", &self.documented_in);
        out
    }
}

serialize_via_payload!(Expression);
