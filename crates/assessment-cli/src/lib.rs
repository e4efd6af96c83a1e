//! # assessment-cli: Command-Line Front End
//!
//! Provides the `assessment` binary on top of `assessment-core` and
//! `assessment-schema`.
//!
//! ## Subcommands
//!
//! - `assessment example`: print the reference assessment payload.
//! - `assessment validate`: check a payload file against an OpenAPI component.
//!
//! ```bash
//! assessment example > payload.json
//! assessment validate payload.json
//! assessment validate provider.json --component Organisation --openapi api.yaml
//! ```
//!
//! Exit codes: 0 when the payload conforms, 1 on schema violations, 2 on
//! operational errors (unreadable files, unknown component).

pub mod config;
pub mod example;
pub mod validate;
