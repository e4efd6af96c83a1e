//! # Component Validation
//!
//! Validation of JSON payloads against the schema components of an OpenAPI
//! document (JSON Schema Draft 2020-12, the dialect of OpenAPI 3.1).
//!
//! ## Reference Resolution
//!
//! Components refer to each other as `#/components/schemas/<Name>`. A
//! component is compiled as the root of a synthetic schema document that
//! also carries a copy of `components`, so these pointers resolve inside the
//! compiled document itself.
//!
//! Any other `$ref` target (remote URLs, sibling files) is refused by
//! [`NoRemoteRetriever`]; validation never touches the network.
//!
//! ## Report Shape
//!
//! A [`ValidationReport`] maps the JSON pointer of each violating location
//! in the payload (`""` for the root) to the ordered list of messages for
//! that location. Pointers are sorted.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use jsonschema::{Retrieve, Uri, ValidationOptions, Validator};
use serde_json::{json, Value};
use thiserror::Error;

use crate::openapi::OpenApiDocument;

/// Retriever that refuses every external reference.
struct NoRemoteRetriever;

impl Retrieve for NoRemoteRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external reference '{}' is not resolvable offline", uri.as_str()).into())
    }
}

/// Operational failure while loading a document or compiling a component.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The OpenAPI document could not be read or parsed.
    #[error("OpenAPI load error for '{location}': {reason}")]
    OpenApiLoadError {
        /// Path or label of the document.
        location: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The document parsed but is not a usable OpenAPI document.
    #[error("invalid OpenAPI document '{location}': {reason}")]
    InvalidOpenApi {
        /// Path or label of the document.
        location: String,
        /// What is missing or malformed.
        reason: String,
    },

    /// No component of that name exists in `components.schemas`.
    #[error("schema component '{component}' not found in '{location}'")]
    ComponentNotFound {
        /// Requested component name.
        component: String,
        /// Path or label of the document.
        location: String,
    },

    /// The component could not be compiled into a validator.
    #[error("validator build error for component '{component}': {reason}")]
    ValidatorBuildError {
        /// Component name.
        component: String,
        /// Reason the validator could not be built.
        reason: String,
    },

    /// The payload file could not be loaded or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoadError {
        /// Path to the payload that failed to load.
        path: String,
        /// Reason the payload could not be loaded.
        reason: String,
    },
}

/// Violations found in one payload, keyed by JSON pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    /// Returns true if the payload conforms to the component.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violating locations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for one JSON pointer.
    pub fn messages(&self, pointer: &str) -> &[String] {
        self.errors.get(pointer).map(Vec::as_slice).unwrap_or_default()
    }

    /// Violating pointers in sorted order.
    pub fn pointers(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Iterate `(pointer, messages)` pairs in pointer order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(pointer, messages)| (pointer.as_str(), messages.as_slice()))
    }

    /// Consumes self and returns the pointer → messages map.
    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }

    fn push(&mut self, pointer: String, message: String) {
        self.errors.entry(pointer).or_default().push(message);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (pointer, messages) in self.iter() {
            for message in messages {
                if !first {
                    writeln!(f)?;
                }
                first = false;
                if pointer.is_empty() {
                    write!(f, "  (root): {message}")?;
                } else {
                    write!(f, "  {pointer}: {message}")?;
                }
            }
        }
        Ok(())
    }
}

/// Validator for the schema components of one OpenAPI document.
///
/// ## Thread Safety
///
/// `SchemaValidator` is `Send + Sync`. The document is loaded once at
/// construction; each validation compiles its component afresh.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    document: OpenApiDocument,
}

impl SchemaValidator {
    /// Wrap an already loaded document.
    pub fn new(document: OpenApiDocument) -> Self {
        Self { document }
    }

    /// Load the OpenAPI document at `path`.
    ///
    /// # Errors
    ///
    /// See [`OpenApiDocument::from_file`].
    pub fn from_openapi_file(path: impl AsRef<Path>) -> Result<Self, SchemaValidationError> {
        OpenApiDocument::from_file(path).map(Self::new)
    }

    /// Parse an OpenAPI document held in memory.
    pub fn from_openapi_str(content: &str, location: &str) -> Result<Self, SchemaValidationError> {
        OpenApiDocument::from_yaml_str(content, location).map(Self::new)
    }

    /// The underlying document.
    pub fn document(&self) -> &OpenApiDocument {
        &self.document
    }

    /// Returns the number of schema components.
    pub fn component_count(&self) -> usize {
        self.document.schemas().len()
    }

    /// Returns the names of all schema components, sorted alphabetically.
    pub fn component_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.document.schemas().keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Look up a schema component by name.
    pub fn get_component(&self, name: &str) -> Option<&Value> {
        self.document.schema(name)
    }

    fn build_options(&self) -> ValidationOptions {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        opts.with_retriever(NoRemoteRetriever);
        opts
    }

    /// Compile a validator for one component.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ComponentNotFound` if the component
    /// does not exist, and `SchemaValidationError::ValidatorBuildError` if it
    /// cannot be compiled.
    pub fn build_validator(&self, component: &str) -> Result<Validator, SchemaValidationError> {
        let schema = self.document.schema(component).ok_or_else(|| {
            SchemaValidationError::ComponentNotFound {
                component: component.to_string(),
                location: self.document.location().to_string(),
            }
        })?;

        let root = match schema {
            Value::Object(map) => {
                let mut root = map.clone();
                root.insert(
                    "components".to_string(),
                    json!({ "schemas": self.document.schemas() }),
                );
                Value::Object(root)
            }
            // Boolean schemas carry no references.
            other => other.clone(),
        };

        tracing::debug!(
            component,
            location = self.document.location(),
            "compiling schema component"
        );

        self.build_options().build(&root).map_err(|e| {
            SchemaValidationError::ValidatorBuildError {
                component: component.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Validate a payload against a named component.
    ///
    /// # Errors
    ///
    /// Only operational failures are errors; violations are returned in the
    /// report.
    pub fn validate(
        &self,
        payload: &Value,
        component: &str,
    ) -> Result<ValidationReport, SchemaValidationError> {
        let validator = self.build_validator(component)?;

        let mut report = ValidationReport::default();
        for error in validator.iter_errors(payload) {
            report.push(error.instance_path.to_string(), error.to_string());
        }

        if !report.is_valid() {
            tracing::debug!(
                component,
                violations = report.len(),
                "payload does not conform"
            );
        }
        Ok(report)
    }

    /// Validate a JSON or YAML payload file against a named component.
    ///
    /// The format follows the extension: `.yaml`/`.yml` for YAML, anything
    /// else for JSON.
    pub fn validate_file(
        &self,
        payload_path: &Path,
        component: &str,
    ) -> Result<ValidationReport, SchemaValidationError> {
        let path = payload_path.display().to_string();
        let content = std::fs::read_to_string(payload_path).map_err(|e| {
            SchemaValidationError::DocumentLoadError {
                path: path.clone(),
                reason: format!("cannot read file: {e}"),
            }
        })?;

        let ext = payload_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let parsed = match ext {
            "yaml" | "yml" => crate::openapi::yaml_str_to_json(&content),
            _ => serde_json::from_str(&content).map_err(|e| format!("invalid JSON: {e}")),
        };
        let payload =
            parsed.map_err(|reason| SchemaValidationError::DocumentLoadError { path, reason })?;

        self.validate(&payload, component)
    }
}

/// One-shot validation: load the OpenAPI document at `openapi_file` and
/// validate `payload` against `component`.
pub fn validate_payload(
    payload: &Value,
    openapi_file: impl AsRef<Path>,
    component: &str,
) -> Result<ValidationReport, SchemaValidationError> {
    SchemaValidator::from_openapi_file(openapi_file)?.validate(payload, component)
}
