//! # OpenAPI Document Loading
//!
//! Reads an OpenAPI document (YAML or JSON) into a `serde_json::Value` tree
//! and exposes its `components.schemas` map.
//!
//! YAML is converted value by value rather than deserialized straight into
//! JSON: OpenAPI documents routinely use unquoted integer map keys (response
//! codes such as `200:`), which JSON objects can only hold as strings.

use std::path::Path;

use serde_json::{Map, Value};

use crate::validate::SchemaValidationError;

/// A parsed OpenAPI document.
#[derive(Debug, Clone)]
pub struct OpenApiDocument {
    /// Where the document was read from, for error messages.
    location: String,
    /// The full document as JSON.
    document: Value,
    /// Copy of `components.schemas`.
    schemas: Map<String, Value>,
}

impl OpenApiDocument {
    /// Load a document from a file. `.json` files are parsed as JSON, every
    /// other extension as YAML.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::OpenApiLoadError` if the file cannot be
    /// read or parsed, and `SchemaValidationError::InvalidOpenApi` if it lacks
    /// the `openapi` version or the `components.schemas` map.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaValidationError> {
        let path = path.as_ref();
        let location = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SchemaValidationError::OpenApiLoadError {
                location: location.clone(),
                reason: format!("cannot read file: {e}"),
            }
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let document = if is_json {
            serde_json::from_str(&content).map_err(|e| SchemaValidationError::OpenApiLoadError {
                location: location.clone(),
                reason: format!("invalid JSON: {e}"),
            })?
        } else {
            parse_yaml(&content, &location)?
        };

        Self::from_value(document, location)
    }

    /// Parse a YAML (or JSON, which is a YAML subset) document held in memory.
    ///
    /// `location` only labels error messages.
    pub fn from_yaml_str(content: &str, location: &str) -> Result<Self, SchemaValidationError> {
        let document = parse_yaml(content, location)?;
        Self::from_value(document, location.to_string())
    }

    fn from_value(document: Value, location: String) -> Result<Self, SchemaValidationError> {
        let invalid = |reason: &str| SchemaValidationError::InvalidOpenApi {
            location: location.clone(),
            reason: reason.to_string(),
        };

        match document.get("openapi") {
            Some(Value::String(version)) if !version.is_empty() => {}
            _ => return Err(invalid("missing 'openapi' version string")),
        }
        let schemas = match document.pointer("/components/schemas") {
            Some(Value::Object(schemas)) => schemas.clone(),
            _ => return Err(invalid("missing 'components.schemas' map")),
        };

        Ok(Self {
            location,
            document,
            schemas,
        })
    }

    /// Where the document was read from.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The declared OpenAPI version, e.g. `3.1.0`.
    pub fn openapi_version(&self) -> &str {
        self.document
            .get("openapi")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The `components.schemas` map.
    pub fn schemas(&self) -> &Map<String, Value> {
        &self.schemas
    }

    /// Look up one schema component by name.
    pub fn schema(&self, name: &str) -> Option<&Value> {
        self.schemas().get(name)
    }

    /// The whole document.
    pub fn as_value(&self) -> &Value {
        &self.document
    }
}

fn parse_yaml(content: &str, location: &str) -> Result<Value, SchemaValidationError> {
    yaml_str_to_json(content).map_err(|reason| SchemaValidationError::OpenApiLoadError {
        location: location.to_string(),
        reason,
    })
}

/// Parse YAML text (JSON included) into a JSON value tree.
///
/// The error is a reason string; callers wrap it in the error variant that
/// fits what they were loading.
pub(crate) fn yaml_str_to_json(content: &str) -> Result<Value, String> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {e}"))?;
    yaml_to_json(yaml).map_err(|e| format!("YAML-to-JSON conversion failed: {e}"))
}

/// Convert a YAML tree into JSON. Scalar map keys (numbers, booleans)
/// become strings; tags are dropped and the tagged value kept.
fn yaml_to_json(yaml: serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => json_number(&n).map(Value::Number)?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| Ok((map_key(key)?, yaml_to_json(value)?)))
                .collect::<Result<Map<String, Value>, String>>()?,
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn json_number(n: &serde_yaml::Number) -> Result<serde_json::Number, String> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(|| format!("number {n} has no JSON representation"))
}

fn map_key(key: serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("map key {other:?} is not a scalar")),
    }
}
