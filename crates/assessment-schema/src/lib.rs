//! # assessment-schema: OpenAPI Component Validation
//!
//! Checks serialized Assessment payloads against the JSON Schema components
//! of an OpenAPI 3.1 document.
//!
//! ## Loading (`openapi`)
//!
//! [`OpenApiDocument`] reads the document from YAML or JSON, converts it to
//! a JSON value tree, and checks that it declares an `openapi` version and a
//! `components.schemas` map.
//!
//! ## Validation (`validate`)
//!
//! [`SchemaValidator`] compiles a named component as a Draft 2020-12 schema
//! with the document's components embedded, so `#/components/schemas/*`
//! references resolve locally. Key function:
//!
//! - [`SchemaValidator::validate`]: returns a [`ValidationReport`] mapping
//!   each violating JSON pointer to its messages. An empty report means the
//!   payload is valid.
//!
//! ## Crate Policy
//!
//! - Does not depend on `assessment-core`: it validates any JSON value.
//! - External `$ref` targets are never fetched.
//! - Schema violations are data ([`ValidationReport`]); only operational
//!   failures (unreadable document, unknown component) are errors.

pub mod openapi;
pub mod validate;

pub use openapi::OpenApiDocument;
pub use validate::{validate_payload, SchemaValidationError, SchemaValidator, ValidationReport};
