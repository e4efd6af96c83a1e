//! # Statement
//!
//! Outcome of one `results_in` dimension of an Assessment.

use crate::entity::{put_set, serialize_via_payload, Entity, FieldSlot, Payload};

/// Interpretation and judgement for one assessment dimension, serialized as
/// the `Statement` schema component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    id: Option<String>,
    /// `negative`, `neutral` or `positive`; not checked here.
    interpretation: Option<String>,
    judgement: Option<String>,
}

impl Statement {
    /// Interpretation code.
    pub fn interpretation(&self) -> Option<&str> {
        self.interpretation.as_deref()
    }

    /// Free-text judgement.
    pub fn judgement(&self) -> Option<&str> {
        self.judgement.as_deref()
    }
}

impl Entity for Statement {
    const SCHEMA_NAME: &'static str = "Statement";
    const FIELDS: &'static [&'static str] = &["interpretation", "judgement"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn field_slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "id" => Some(FieldSlot::Text(&mut self.id)),
            "interpretation" => Some(FieldSlot::Text(&mut self.interpretation)),
            "judgement" => Some(FieldSlot::Text(&mut self.judgement)),
            _ => None,
        }
    }

    fn to_payload(&self) -> Payload {
        let mut out = Payload::new();
        put_set(&mut out, "interpretation", &self.interpretation);
        put_set(&mut out, "judgement", &self.judgement);
        out
    }
}

serialize_via_payload!(Statement);
