//! # Validate Subcommand
//!
//! Checks a JSON or YAML payload file against one schema component of the
//! OpenAPI document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use assessment_schema::SchemaValidator;

/// Arguments for the `assessment validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Payload file (`.json`, `.yaml` or `.yml`).
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Schema component to validate against.
    #[arg(long, default_value = "Assessment")]
    pub component: String,

    /// OpenAPI document. Defaults to `$ASSESSMENT_OPENAPI`, then
    /// `openapi/assessments.openapi.yaml`.
    #[arg(long, value_name = "PATH")]
    pub openapi: Option<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the payload conforms, 1 on violations.
/// Operational failures are returned as errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let openapi = crate::config::openapi_path(args.openapi.as_deref());
    validate_with(&args.path, &args.component, &openapi)
}

/// Validate `path` against `component` of the document at `openapi`.
pub fn validate_with(path: &Path, component: &str, openapi: &Path) -> Result<u8> {
    let validator = SchemaValidator::from_openapi_file(openapi)
        .with_context(|| format!("failed to load OpenAPI document {}", openapi.display()))?;

    tracing::info!(
        document = %openapi.display(),
        components = validator.component_count(),
        "loaded OpenAPI document"
    );

    let report = validator
        .validate_file(path, component)
        .with_context(|| format!("failed to validate {}", path.display()))?;

    if report.is_valid() {
        println!("OK: {} conforms to {component}", path.display());
        Ok(0)
    } else {
        println!(
            "FAIL: {} has {} violation(s) against {component}",
            path.display(),
            report.len()
        );
        print!("{report}");
        Ok(1)
    }
}
