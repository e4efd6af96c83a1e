//! # Entity Base Contract
//!
//! The [`Entity`] trait is implemented by every node of the Assessment tree.
//! It provides the optional identity field, the flexible-key setter in its
//! strict and permissive forms, and payload serialization.
//!
//! ## Field Resolution
//!
//! A caller key is normalized with [`normalize_key`] and then resolved by
//! the entity's [`Entity::field_slot`], an explicit `match` from canonical
//! camelCase name to a typed [`FieldSlot`]. The value is assigned only when
//! its [`FieldValue`] shape matches the slot.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::key::normalize_key;

/// Ordered JSON mapping produced by serialization. Key order is the fixed
/// declared order of each entity, not the order of caller assignments.
pub type Payload = Map<String, Value>;

/// A value handed to the flexible setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single string (names, descriptions, URIs, enum codes).
    Text(String),
    /// An ordered list of strings (document URIs).
    List(Vec<String>),
}

impl FieldValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Shape of a field or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Single string.
    Text,
    /// List of strings.
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::List => f.write_str("list"),
        }
    }
}

/// Mutable handle to the storage behind one settable field.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    /// Optional single string; unset is `None`.
    Text(&'a mut Option<String>),
    /// Ordered list of strings; unset is empty.
    List(&'a mut Vec<String>),
}

impl FieldSlot<'_> {
    /// The kind of value this slot accepts.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Assign `value`, replacing any previous content.
    ///
    /// Returns the expected kind when `value` has the wrong shape; the slot
    /// is left untouched in that case.
    pub fn assign(self, value: FieldValue) -> Result<(), ValueKind> {
        match (self, value) {
            (Self::Text(slot), FieldValue::Text(text)) => {
                *slot = Some(text);
                Ok(())
            }
            (Self::List(slot), FieldValue::List(items)) => {
                *slot = items;
                Ok(())
            }
            (slot, _) => Err(slot.kind()),
        }
    }
}

/// Common contract of every node in the Assessment tree.
pub trait Entity: Sized {
    /// Name of the schema component this entity serializes to.
    const SCHEMA_NAME: &'static str;

    /// Canonical camelCase names of the settable payload fields, in
    /// serialization order. `id` is settable too but is not listed here
    /// because it never appears in the payload.
    const FIELDS: &'static [&'static str];

    /// The caller-assigned identifier, if any.
    fn id(&self) -> Option<&str>;

    /// Resolve a canonical field name (or `id`) to its storage.
    fn field_slot(&mut self, field: &str) -> Option<FieldSlot<'_>>;

    /// Serialize the entity, omitting every field that was never assigned.
    fn to_payload(&self) -> Payload;

    /// Set the identifier used when this entity is referenced elsewhere.
    fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        if let Some(FieldSlot::Text(slot)) = self.field_slot("id") {
            *slot = Some(id.into());
        }
        self
    }

    /// Canonical names of the payload fields settable through [`Entity::set`],
    /// in serialization order.
    fn field_names() -> &'static [&'static str] {
        Self::FIELDS
    }

    /// Whether `key` (camelCase or snake_case) names a settable field.
    fn accepts(key: &str) -> bool {
        let field = normalize_key(key);
        field == "id" || Self::FIELDS.iter().any(|name| *name == field.as_ref())
    }

    /// Assign a field by flexible key, rejecting unknown keys.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] when the normalized key names no
    /// field of this entity, and [`ModelError::ValueKind`] when the value
    /// shape does not fit the field.
    fn set(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<&mut Self, ModelError> {
        let field = normalize_key(key);
        let slot = self
            .field_slot(&field)
            .ok_or_else(|| ModelError::UnknownField {
                entity: Self::SCHEMA_NAME,
                key: key.to_string(),
            })?;
        slot.assign(value.into())
            .map_err(|expected| ModelError::ValueKind {
                entity: Self::SCHEMA_NAME,
                field: field.to_string(),
                expected,
            })?;
        Ok(self)
    }

    /// Assign a field by flexible key, silently skipping anything that
    /// cannot be assigned.
    ///
    /// Unknown keys are tolerated so that payload keys added by newer schema
    /// revisions do not break older callers. Typos are masked too; prefer
    /// [`Entity::set`] unless that tolerance is wanted.
    fn set_lenient(&mut self, key: &str, value: impl Into<FieldValue>) -> &mut Self {
        let field = normalize_key(key);
        match self.field_slot(&field) {
            Some(slot) => {
                let value = value.into();
                let given = value.kind();
                if let Err(expected) = slot.assign(value) {
                    tracing::warn!(
                        entity = Self::SCHEMA_NAME,
                        field = %field,
                        %expected,
                        %given,
                        "skipping value of the wrong kind"
                    );
                }
            }
            None => {
                tracing::debug!(entity = Self::SCHEMA_NAME, key, "ignoring unknown field");
            }
        }
        self
    }

    /// Whether serialization would currently produce an empty mapping.
    fn is_empty(&self) -> bool {
        self.to_payload().is_empty()
    }
}

// ─── Payload helpers ─────────────────────────────────────────────────

/// Append a default child to `children` and return it for population.
pub(crate) fn push_child<'a, E: Entity + Default>(
    parent: &'static str,
    children: &'a mut Vec<E>,
) -> &'a mut E {
    let index = children.len();
    tracing::debug!(parent, child = E::SCHEMA_NAME, index, "created child");
    children.push(E::default());
    &mut children[index]
}

/// Insert `key` when the field has been assigned.
pub(crate) fn put_set(out: &mut Payload, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        out.insert(key.to_string(), Value::String(value.clone()));
    }
}

/// Insert `key` when the field holds a non-empty string.
pub(crate) fn put_non_empty(out: &mut Payload, key: &str, value: &Option<String>) -> bool {
    match value.as_deref() {
        Some(text) if !text.is_empty() => {
            out.insert(key.to_string(), Value::String(text.to_string()));
            true
        }
        _ => false,
    }
}

/// Insert `key` as a string array when the list is non-empty.
pub(crate) fn put_list(out: &mut Payload, key: &str, items: &[String]) {
    if !items.is_empty() {
        let values = items.iter().cloned().map(Value::String).collect();
        out.insert(key.to_string(), Value::Array(values));
    }
}

/// Insert `key` as an array of child payloads when there are children.
pub(crate) fn put_children<E: Entity>(out: &mut Payload, key: &str, children: &[E]) {
    if !children.is_empty() {
        let values = children
            .iter()
            .map(|child| Value::Object(child.to_payload()))
            .collect();
        out.insert(key.to_string(), Value::Array(values));
    }
}

/// Implement `serde::Serialize` for an entity by emitting its payload.
macro_rules! serialize_via_payload {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $entity {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serde::Serialize::serialize(&$crate::entity::Entity::to_payload(self), serializer)
                }
            }
        )+
    };
}

pub(crate) use serialize_via_payload;
