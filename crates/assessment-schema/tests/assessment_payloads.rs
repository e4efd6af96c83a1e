//! Integration test: validate payloads built with `assessment-core` against
//! the `Assessment` component of `openapi/assessments.openapi.yaml`.
//!
//! The positive case is the full reference assessment. Each negative case
//! drops one required part and checks that the report names the missing
//! field and says it is required.

use std::path::PathBuf;

use assessment_core::example::reference_assessment;
use assessment_core::{Assessment, BindingRequirement, Dimension, Entity};
use assessment_schema::{validate_payload, SchemaValidator, ValidationReport};

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn openapi_file() -> PathBuf {
    repo_root().join("openapi").join("assessments.openapi.yaml")
}

fn validate(assessment: &Assessment) -> ValidationReport {
    let payload = serde_json::to_value(assessment).unwrap();
    validate_payload(&payload, openapi_file(), "Assessment").expect("OpenAPI document should load")
}

fn assert_required_violation(report: &ValidationReport, field: &str) {
    assert!(!report.is_valid(), "Validation should fail when {field} is missing.");
    let all = report.to_string().to_lowercase();
    assert!(all.contains(field), "Expected a violation mentioning '{field}', got:\n{all}");
    assert!(all.contains("required"), "Expected a 'required' violation, got:\n{all}");
}

fn add_provider(assessment: &mut Assessment) {
    assessment
        .set_provider_inline()
        .set("name", "City of Brussels")
        .unwrap()
        .set("organisation_type", "local_public_sector_body")
        .unwrap()
        .set("country", "BE")
        .unwrap();
}

fn add_minimal_requirement(assessment: &mut Assessment) {
    let br = assessment.add_binding_requirement();
    br.set("description", "Minimal description").unwrap();
    br.add_expression()
        .set("name", "Act")
        .unwrap()
        .set("description", "Ref")
        .unwrap();
    br.add_affected_service().set("name", "Service").unwrap();
}

#[test]
fn test_reference_assessment_is_valid() {
    let assessment = reference_assessment().unwrap();
    let report = validate(&assessment);
    assert!(
        report.is_valid(),
        "Payload must validate against the Assessment schema. Errors:\n{report}"
    );
}

#[test]
fn test_two_binding_requirements_are_valid() {
    let mut assessment = Assessment::new();
    assessment.set("name", "Two requirements").unwrap();
    assessment.set_provider_reference("b21e876e-8ad0-4057-ad57-de45c51d374f");
    add_minimal_requirement(&mut assessment);
    add_minimal_requirement(&mut assessment);

    let payload = serde_json::to_value(&assessment).unwrap();
    assert!(payload["binding_requirement"].is_array());
    let report = validate(&assessment);
    assert!(report.is_valid(), "Errors:\n{report}");
}

#[test]
fn test_fails_when_name_is_missing() {
    let mut assessment = Assessment::new();
    add_provider(&mut assessment);
    add_minimal_requirement(&mut assessment);

    assert_required_violation(&validate(&assessment), "name");
}

#[test]
fn test_fails_when_provider_is_missing() {
    let mut assessment = Assessment::new();
    assessment.set("name", "No Provider").unwrap();
    add_minimal_requirement(&mut assessment);

    assert_required_violation(&validate(&assessment), "provider");
}

#[test]
fn test_fails_when_binding_requirement_is_missing() {
    let mut assessment = Assessment::new();
    assessment.set("name", "No BR").unwrap();
    assessment
        .set_provider_inline()
        .set("name", "City of Brussels")
        .unwrap()
        .set("organisation_type", "local_public_sector_body")
        .unwrap();

    assert_required_violation(&validate(&assessment), "binding_requirement");
}

#[test]
fn test_fails_when_binding_requirement_fields_missing() {
    let mut assessment = Assessment::new();
    assessment.set("name", "Invalid BR").unwrap();
    assessment
        .set_provider_inline()
        .set("name", "Org")
        .unwrap()
        .set("organisation_type", "local_public_sector_body")
        .unwrap();
    assessment
        .add_binding_requirement()
        .set("description", "desc only")
        .unwrap();

    let report = validate(&assessment);
    assert_required_violation(&report, "expression");
    assert_required_violation(&report, "affects");
    assert_eq!(report.messages("/binding_requirement").len(), 2);
}

#[test]
fn test_fails_on_unknown_interpretation() {
    let mut assessment = Assessment::new();
    assessment.set("name", "Bad statement").unwrap();
    add_provider(&mut assessment);
    add_minimal_requirement(&mut assessment);
    assessment
        .results_in_mut(Dimension::Legal)
        .set("interpretation", "Requires follow-up")
        .unwrap();

    let report = validate(&assessment);
    assert!(!report.is_valid());
    assert_eq!(report.pointers().collect::<Vec<_>>(), ["/results_in/legal/interpretation"]);
}

#[test]
fn test_shipped_document_has_every_component() {
    let validator = SchemaValidator::from_openapi_file(openapi_file()).unwrap();
    for name in [
        "Assessment",
        "BindingRequirement",
        "Organisation",
        "Expression",
        "AffectedService",
        "Participant",
        "Statement",
        "Asset",
    ] {
        assert!(validator.get_component(name).is_some(), "missing component {name}");
        let result = validator.build_validator(name);
        assert!(result.is_ok(), "{name} failed to compile: {:?}", result.err());
    }
}

#[test]
fn test_entity_schema_names_exist_in_document() {
    let validator = SchemaValidator::from_openapi_file(openapi_file()).unwrap();
    let names = validator.component_names();
    assert!(names.contains(&Assessment::SCHEMA_NAME));
    assert!(names.contains(&BindingRequirement::SCHEMA_NAME));
    assert!(names.contains(&assessment_core::Asset::SCHEMA_NAME));
    assert!(names.contains(&assessment_core::Participant::SCHEMA_NAME));
}
