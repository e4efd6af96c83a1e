//! # Binding Requirement
//!
//! A requirement binding organisations and public services, aggregating the
//! expressions it derives from, the services it affects, its participants,
//! and the assets involved.
//!
//! Children are created through the `add_*` operations, which append a new
//! default child and hand back a mutable reference to it. The read-only
//! accessors never create anything.

use serde_json::Value;

use crate::asset::{Asset, AssetEntry};
use crate::entity::{
    push_child, put_children, put_list, put_set, serialize_via_payload, Entity, FieldSlot, Payload,
};
use crate::expression::Expression;
use crate::participant::Participant;
use crate::service::AffectedService;

/// Binding requirement, serialized as the `BindingRequirement` schema
/// component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingRequirement {
    id: Option<String>,
    description: Option<String>,
    documents: Vec<String>,
    expression: Vec<Expression>,
    affects: Vec<AffectedService>,
    has_participation: Vec<Participant>,
    /// Asset list order; inline entries index into `inline_assets`.
    asset: Vec<AssetSlot>,
    inline_assets: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AssetSlot {
    Inline(usize),
    Reference(String),
}

impl BindingRequirement {
    /// Free-text description, e.g. the article the requirement stems from.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Supporting document URIs in insertion order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Append a supporting document URI.
    pub fn add_document(&mut self, url: impl Into<String>) -> &mut Self {
        self.documents.push(url.into());
        self
    }

    /// Expressions in insertion order.
    pub fn expressions(&self) -> &[Expression] {
        &self.expression
    }

    /// Append a new expression and return it for population.
    pub fn add_expression(&mut self) -> &mut Expression {
        push_child(Self::SCHEMA_NAME, &mut self.expression)
    }

    /// Affected public services in insertion order.
    pub fn affected_services(&self) -> &[AffectedService] {
        &self.affects
    }

    /// Append a new affected public service and return it for population.
    pub fn add_affected_service(&mut self) -> &mut AffectedService {
        push_child(Self::SCHEMA_NAME, &mut self.affects)
    }

    /// Participants in insertion order.
    pub fn participants(&self) -> &[Participant] {
        &self.has_participation
    }

    /// Append a new participant and return it for population.
    pub fn add_participant(&mut self) -> &mut Participant {
        push_child(Self::SCHEMA_NAME, &mut self.has_participation)
    }

    /// Asset entries (inline or reference) in insertion order.
    pub fn assets(&self) -> impl Iterator<Item = AssetEntry<'_>> + '_ {
        self.asset.iter().filter_map(|slot| match slot {
            AssetSlot::Inline(index) => self.inline_assets.get(*index).map(AssetEntry::Inline),
            AssetSlot::Reference(id) => Some(AssetEntry::Reference(id.as_str())),
        })
    }

    /// Append a new inline asset and return it for population.
    pub fn add_asset(&mut self) -> &mut Asset {
        self.asset.push(AssetSlot::Inline(self.inline_assets.len()));
        push_child(Self::SCHEMA_NAME, &mut self.inline_assets)
    }

    /// Append a reference to an existing asset by id.
    pub fn add_asset_reference(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        tracing::debug!(parent = Self::SCHEMA_NAME, %id, "added asset reference");
        self.asset.push(AssetSlot::Reference(id));
        self
    }
}

impl Entity for BindingRequirement {
    const SCHEMA_NAME: &'static str = "BindingRequirement";
    const FIELDS: &'static [&'static str] = &["description", "documents"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn field_slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "id" => Some(FieldSlot::Text(&mut self.id)),
            "description" => Some(FieldSlot::Text(&mut self.description)),
            "documents" => Some(FieldSlot::List(&mut self.documents)),
            _ => None,
        }
    }

    fn to_payload(&self) -> Payload {
        let mut out = Payload::new();
        put_children(&mut out, "expression", &self.expression);
        put_set(&mut out, "description", &self.description);
        put_list(&mut out, "documents", &self.documents);
        put_children(&mut out, "affects", &self.affects);
        put_children(&mut out, "has_participation", &self.has_participation);
        if !self.asset.is_empty() {
            let entries = self.assets().map(|entry| entry.to_value()).collect();
            out.insert("asset".to_string(), Value::Array(entries));
        }
        out
    }
}

serialize_via_payload!(BindingRequirement);
