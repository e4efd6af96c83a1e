//! # Participant
//!
//! A stakeholder participating in a binding requirement.

use crate::entity::{put_set, serialize_via_payload, Entity, FieldSlot, Payload};

/// Stakeholder and its type, serialized as the `Participant` schema
/// component. The payload lists `country` before `participant_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    id: Option<String>,
    participant_type: Option<String>,
    country: Option<String>,
}

impl Participant {
    /// Participant category code, e.g. `private_businesses`.
    pub fn participant_type(&self) -> Option<&str> {
        self.participant_type.as_deref()
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl Entity for Participant {
    const SCHEMA_NAME: &'static str = "Participant";
    const FIELDS: &'static [&'static str] = &["country", "participantType"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn field_slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "id" => Some(FieldSlot::Text(&mut self.id)),
            "participantType" => Some(FieldSlot::Text(&mut self.participant_type)),
            "country" => Some(FieldSlot::Text(&mut self.country)),
            _ => None,
        }
    }

    fn to_payload(&self) -> Payload {
        let mut out = Payload::new();
        put_set(&mut out, "country", &self.country);
        put_set(&mut out, "participant_type", &self.participant_type);
        out
    }
}

serialize_via_payload!(Participant);
