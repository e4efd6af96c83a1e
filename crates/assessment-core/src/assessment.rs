//! # Assessment (root)
//!
//! Root of the payload tree. Owns the provider, the binding requirements,
//! the per-dimension result statements, and the free-text conclusions.
//!
//! ## Payload Shape
//!
//! Keys are emitted in this fixed order, each only when it has content:
//!
//! 1. `name`
//! 2. `provider`: reference string or inline `Organisation`
//! 3. `binding_requirement`: a single object when exactly one requirement
//!    was added, a list when two or more were
//! 4. `results_in`: non-empty statements, in [`Dimension::all`] order
//! 5. `remaining_barriers`
//! 6. `documents`
//! 7. `other_comment`
//!
//! The single-object collapse applies to `binding_requirement` only. Every
//! other list-valued key stays a list even with one element.

use serde_json::Value;

use crate::binding_requirement::BindingRequirement;
use crate::dimension::Dimension;
use crate::entity::{
    push_child, put_list, put_non_empty, put_set, serialize_via_payload, Entity, FieldSlot, Payload,
};
use crate::organisation::Organisation;
use crate::statement::Statement;

/// Provider of the assessed requirement, as read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider<'a> {
    /// Organisation described in the payload itself.
    Inline(&'a Organisation),
    /// Id of an organisation that already exists on the receiving side.
    Reference(&'a str),
}

impl Provider<'_> {
    /// Payload value: the reference string verbatim, or the inline object.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Inline(organisation) => Value::Object(organisation.to_payload()),
            Self::Reference(id) => Value::String((*id).to_string()),
        }
    }
}

/// Result statements, one optional slot per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ResultsIn {
    legal: Option<Statement>,
    organisational: Option<Statement>,
    semantic: Option<Statement>,
    technical: Option<Statement>,
}

impl ResultsIn {
    fn slot(&self, dimension: Dimension) -> &Option<Statement> {
        match dimension {
            Dimension::Legal => &self.legal,
            Dimension::Organisational => &self.organisational,
            Dimension::Semantic => &self.semantic,
            Dimension::Technical => &self.technical,
        }
    }

    fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<Statement> {
        match dimension {
            Dimension::Legal => &mut self.legal,
            Dimension::Organisational => &mut self.organisational,
            Dimension::Semantic => &mut self.semantic,
            Dimension::Technical => &mut self.technical,
        }
    }

    fn to_payload(&self) -> Payload {
        let mut out = Payload::new();
        for &dimension in Dimension::all() {
            if let Some(statement) = self.slot(dimension) {
                let payload = statement.to_payload();
                if !payload.is_empty() {
                    out.insert(dimension.as_str().to_string(), Value::Object(payload));
                }
            }
        }
        out
    }
}

/// Compliance assessment, serialized as the `Assessment` schema component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assessment {
    id: Option<String>,
    name: Option<String>,
    /// At most one of the two provider fields is set.
    provider_inline: Option<Organisation>,
    provider_reference: Option<String>,
    binding_requirement: Vec<BindingRequirement>,
    results_in: ResultsIn,
    remaining_barriers: Option<String>,
    documents: Vec<String>,
    other_comment: Option<String>,
}

impl Assessment {
    /// Create an empty assessment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assessment name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The provider, if one was set.
    pub fn provider(&self) -> Option<Provider<'_>> {
        match (&self.provider_inline, &self.provider_reference) {
            (Some(organisation), _) => Some(Provider::Inline(organisation)),
            (None, Some(id)) => Some(Provider::Reference(id.as_str())),
            (None, None) => None,
        }
    }

    /// Create a fresh inline provider organisation, replacing any previous
    /// provider (inline or reference), and return it for population.
    pub fn set_provider_inline(&mut self) -> &mut Organisation {
        tracing::debug!(parent = Self::SCHEMA_NAME, "created inline provider");
        self.provider_reference = None;
        self.provider_inline.insert(Organisation::default())
    }

    /// Point the provider at an existing organisation by id, replacing any
    /// previous provider.
    pub fn set_provider_reference(&mut self, id: impl Into<String>) -> &mut Self {
        self.provider_inline = None;
        self.provider_reference = Some(id.into());
        self
    }

    /// Binding requirements in insertion order.
    pub fn binding_requirements(&self) -> &[BindingRequirement] {
        &self.binding_requirement
    }

    /// Append a new binding requirement and return it for population.
    pub fn add_binding_requirement(&mut self) -> &mut BindingRequirement {
        push_child(Self::SCHEMA_NAME, &mut self.binding_requirement)
    }

    /// The statement recorded for `dimension`, if one was created.
    pub fn results_in(&self, dimension: Dimension) -> Option<&Statement> {
        self.results_in.slot(dimension).as_ref()
    }

    /// The statement for `dimension`, created empty on first access.
    pub fn results_in_mut(&mut self, dimension: Dimension) -> &mut Statement {
        self.results_in
            .slot_mut(dimension)
            .get_or_insert_with(Statement::default)
    }

    /// Like [`Assessment::results_in_mut`], addressing the dimension by name
    /// (ASCII case ignored). Returns `None` for a name that is not one of the
    /// four dimensions; nothing is created in that case.
    pub fn results_in_named(&mut self, dimension: &str) -> Option<&mut Statement> {
        match dimension.parse::<Dimension>() {
            Ok(dimension) => Some(self.results_in_mut(dimension)),
            Err(_) => {
                tracing::debug!(dimension, "no such results_in dimension");
                None
            }
        }
    }

    /// Remaining barriers to compliance.
    pub fn remaining_barriers(&self) -> Option<&str> {
        self.remaining_barriers.as_deref()
    }

    /// Top-level supporting document URIs in insertion order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Append a top-level supporting document URI.
    pub fn add_document(&mut self, url: impl Into<String>) -> &mut Self {
        self.documents.push(url.into());
        self
    }

    /// Any other comment.
    pub fn other_comment(&self) -> Option<&str> {
        self.other_comment.as_deref()
    }
}

impl Entity for Assessment {
    const SCHEMA_NAME: &'static str = "Assessment";
    const FIELDS: &'static [&'static str] = &["name", "remainingBarriers", "documents", "otherComment"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn field_slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "id" => Some(FieldSlot::Text(&mut self.id)),
            "name" => Some(FieldSlot::Text(&mut self.name)),
            "remainingBarriers" => Some(FieldSlot::Text(&mut self.remaining_barriers)),
            "documents" => Some(FieldSlot::List(&mut self.documents)),
            "otherComment" => Some(FieldSlot::Text(&mut self.other_comment)),
            _ => None,
        }
    }

    fn to_payload(&self) -> Payload {
        let mut out = Payload::new();
        put_set(&mut out, "name", &self.name);

        if let Some(provider) = self.provider() {
            out.insert("provider".to_string(), provider.to_value());
        }

        let mut requirements: Vec<Value> = self
            .binding_requirement
            .iter()
            .map(|br| Value::Object(br.to_payload()))
            .collect();
        match requirements.len() {
            0 => {}
            1 => {
                out.insert("binding_requirement".to_string(), requirements.remove(0));
            }
            _ => {
                out.insert("binding_requirement".to_string(), Value::Array(requirements));
            }
        }

        let results = self.results_in.to_payload();
        if !results.is_empty() {
            out.insert("results_in".to_string(), Value::Object(results));
        }

        put_non_empty(&mut out, "remaining_barriers", &self.remaining_barriers);
        put_list(&mut out, "documents", &self.documents);
        put_non_empty(&mut out, "other_comment", &self.other_comment);
        out
    }
}

serialize_via_payload!(Assessment);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use serde_json::json;

    fn keys(assessment: &Assessment) -> Vec<String> {
        let payload = assessment.to_payload();
        payload.keys().cloned().collect()
    }

    #[test]
    fn test_new_assessment_serializes_empty() {
        assert!(Assessment::new().to_payload().is_empty());
    }

    #[test]
    fn test_single_binding_requirement_collapses_to_object() {
        let mut a = Assessment::new();
        a.add_binding_requirement().set("description", "Only").unwrap();
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({"binding_requirement": {"description": "Only"}})
        );
    }

    #[test]
    fn test_two_binding_requirements_stay_a_list() {
        let mut a = Assessment::new();
        a.add_binding_requirement().set("description", "First").unwrap();
        a.add_binding_requirement().set("description", "Second").unwrap();
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({"binding_requirement": [{"description": "First"}, {"description": "Second"}]})
        );
    }

    #[test]
    fn test_empty_binding_requirement_still_counts() {
        let mut a = Assessment::new();
        a.add_binding_requirement();
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({"binding_requirement": {}})
        );
    }

    #[test]
    fn test_provider_reference_replaces_inline() {
        let mut a = Assessment::new();
        a.set_provider_inline().set("name", "City of Brussels").unwrap();
        a.set_provider_reference("b21e876e-8ad0-4057-ad57-de45c51d374f");
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({"provider": "b21e876e-8ad0-4057-ad57-de45c51d374f"})
        );
        assert_eq!(
            a.provider(),
            Some(Provider::Reference("b21e876e-8ad0-4057-ad57-de45c51d374f"))
        );
    }

    #[test]
    fn test_inline_provider_replaces_previous_provider() {
        let mut a = Assessment::new();
        a.set_provider_reference("b21e876e-8ad0-4057-ad57-de45c51d374f");
        a.set_provider_inline().set("name", "First").unwrap();
        a.set_provider_inline().set("name", "Second").unwrap();
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({"provider": {"name": "Second"}})
        );
        assert!(matches!(a.provider(), Some(Provider::Inline(org)) if org.name() == Some("Second")));
    }

    #[test]
    fn test_results_in_fixed_order_and_empty_statements_omitted() {
        let mut a = Assessment::new();
        a.results_in_mut(Dimension::Technical)
            .set("interpretation", "neutral")
            .unwrap();
        // Created but never populated: must not appear.
        a.results_in_mut(Dimension::Semantic);
        a.results_in_mut(Dimension::Legal)
            .set("judgement", "Fine")
            .unwrap();

        let payload = a.to_payload();
        let results = payload["results_in"].as_object().unwrap();
        let dims: Vec<&str> = results.keys().map(String::as_str).collect();
        assert_eq!(dims, ["legal", "technical"]);
        assert!(a.results_in(Dimension::Semantic).is_some());
    }

    #[test]
    fn test_results_in_omitted_when_all_statements_empty() {
        let mut a = Assessment::new();
        a.results_in_mut(Dimension::Legal);
        assert!(a.to_payload().is_empty());
    }

    #[test]
    fn test_results_in_named() {
        let mut a = Assessment::new();
        assert!(a.results_in_named("economic").is_none());
        a.results_in_named("Organisational")
            .unwrap()
            .set("interpretation", "positive")
            .unwrap();
        assert_eq!(
            a.results_in(Dimension::Organisational).and_then(Statement::interpretation),
            Some("positive")
        );
        assert!(a.results_in(Dimension::Legal).is_none());
    }

    #[test]
    fn test_results_in_mut_returns_existing_statement() {
        let mut a = Assessment::new();
        a.results_in_mut(Dimension::Legal).set("interpretation", "positive").unwrap();
        a.results_in_mut(Dimension::Legal).set("judgement", "ok").unwrap();
        let statement = a.results_in(Dimension::Legal).unwrap();
        assert_eq!(statement.interpretation(), Some("positive"));
        assert_eq!(statement.judgement(), Some("ok"));
    }

    #[test]
    fn test_free_text_conclusions_omitted_when_empty() {
        let mut a = Assessment::new();
        a.set("remaining_barriers", "").unwrap();
        a.set("other_comment", "").unwrap();
        a.set("name", "").unwrap();
        assert_eq!(serde_json::to_value(&a).unwrap(), json!({"name": ""}));
    }

    #[test]
    fn test_key_order_is_fixed() {
        let mut a = Assessment::new();
        a.set("other_comment", "c").unwrap();
        a.add_document("https://files.example.com/documents/req-1.pdf");
        a.set("remaining_barriers", "b").unwrap();
        a.results_in_mut(Dimension::Legal).set("judgement", "j").unwrap();
        a.add_binding_requirement().set("description", "d").unwrap();
        a.set_provider_reference("p");
        a.set("name", "n").unwrap();

        assert_eq!(
            keys(&a),
            [
                "name",
                "provider",
                "binding_requirement",
                "results_in",
                "remaining_barriers",
                "documents",
                "other_comment",
            ]
        );
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let mut a = Assessment::new();
        a.set("name", "n").unwrap();
        a.add_binding_requirement().add_expression().set("name", "e").unwrap();
        let first = serde_json::to_string(&a).unwrap();
        let second = serde_json::to_string(&a).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_provider_is_not_a_settable_field() {
        let mut a = Assessment::new();
        let err = a.set("provider", "p").unwrap_err();
        assert!(matches!(err, ModelError::UnknownField { entity: "Assessment", .. }));
    }
}
