//! # Error Types
//!
//! Errors raised while populating the entity tree. Serialization itself is
//! total and has no error type; schema-level problems (missing required
//! fields, enum violations) are reported by the validator downstream.

use thiserror::Error;

use crate::entity::ValueKind;

/// Error returned by strict field assignment and dimension parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The key did not resolve to a declared field of the entity.
    #[error("unknown field '{key}' on {entity}")]
    UnknownField {
        /// Schema component name of the entity.
        entity: &'static str,
        /// The key exactly as the caller supplied it.
        key: String,
    },

    /// The value shape does not fit the field (text into a list field or
    /// the reverse).
    #[error("field '{field}' on {entity} expects a {expected} value")]
    ValueKind {
        /// Schema component name of the entity.
        entity: &'static str,
        /// Canonical (camelCase) field name.
        field: String,
        /// The kind of value the field holds.
        expected: ValueKind,
    },

    /// The name is not one of the four `results_in` dimensions.
    #[error("unknown results_in dimension: {0:?}")]
    UnknownDimension(String),
}
