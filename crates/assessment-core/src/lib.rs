//! # assessment-core: Assessment Payload Model
//!
//! Typed entity tree for building compliance Assessment payloads: the
//! legal, organisational, semantic and technical evaluation of a binding
//! requirement between organisations and public services.
//!
//! ```text
//! Assessment
//! ├── provider ─────────────── Organisation | reference id
//! ├── binding_requirement ──── [BindingRequirement]
//! │   ├── expression ───────── [Expression]
//! │   ├── affects ──────────── [AffectedService]
//! │   ├── has_participation ── [Participant]
//! │   └── asset ────────────── [Asset | reference id]
//! └── results_in ───────────── Dimension -> Statement
//! ```
//!
//! [`example::reference_assessment`] builds a complete instance of the tree.
//!
//! ## Key Design Principles
//!
//! 1. **Flexible keys, typed fields.** Every entity accepts field keys in
//!    camelCase or snake_case through [`Entity::set`]. Keys resolve to typed
//!    slots by an explicit `match`; unknown keys are errors unless the caller
//!    opts into [`Entity::set_lenient`].
//!
//! 2. **Explicit child creation.** Children are created by `add_*` operations
//!    that return a mutable handle to the new child. Read-only queries never
//!    create anything.
//!
//! 3. **Tagged unions for references.** Provider and asset slots read back
//!    as either an inline entity or an opaque reference id ([`Provider`],
//!    [`AssetEntry`]). Inline children live in typed storage, so the handle
//!    returned on creation needs no variant check.
//!
//! 4. **Omission on empty.** [`Entity::to_payload`] emits only the fields
//!    that were assigned, in a fixed key order. Serialization never fails.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `assessment-*` crates.
//! - No I/O. Schema validation lives in `assessment-schema`.
//! - No `.unwrap()` outside tests.

pub mod assessment;
pub mod asset;
pub mod binding_requirement;
pub mod dimension;
pub mod entity;
pub mod error;
pub mod example;
pub mod expression;
pub mod key;
pub mod organisation;
pub mod participant;
pub mod service;
pub mod statement;

pub use assessment::{Assessment, Provider};
pub use asset::{Asset, AssetEntry};
pub use binding_requirement::BindingRequirement;
pub use dimension::Dimension;
pub use entity::{Entity, FieldSlot, FieldValue, Payload, ValueKind};
pub use error::ModelError;
pub use expression::Expression;
pub use key::{camel_to_snake, normalize_key};
pub use organisation::Organisation;
pub use participant::Participant;
pub use service::AffectedService;
pub use statement::Statement;
