//! OpenAPI document location.
//!
//! Resolution order: the `--openapi` flag, then the `ASSESSMENT_OPENAPI`
//! environment variable, then `openapi/assessments.openapi.yaml` found by
//! walking up from the current directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the OpenAPI document path.
pub const OPENAPI_ENV: &str = "ASSESSMENT_OPENAPI";

/// Default document path, relative to the repository root.
pub const DEFAULT_OPENAPI_PATH: &str = "openapi/assessments.openapi.yaml";

/// Resolve the OpenAPI document path from the flag and the process
/// environment.
pub fn openapi_path(flag: Option<&Path>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_openapi_path(flag, std::env::var_os(OPENAPI_ENV), &cwd)
}

/// Resolution without touching the process environment.
pub fn resolve_openapi_path(flag: Option<&Path>, env: Option<OsString>, cwd: &Path) -> PathBuf {
    if let Some(path) = flag {
        tracing::debug!(path = %path.display(), "OpenAPI path from --openapi");
        return path.to_path_buf();
    }
    if let Some(value) = env.filter(|v| !v.is_empty()) {
        let path = PathBuf::from(value);
        tracing::debug!(path = %path.display(), "OpenAPI path from {OPENAPI_ENV}");
        return path;
    }
    match find_upwards(cwd, Path::new(DEFAULT_OPENAPI_PATH)) {
        Some(found) => found,
        None => {
            tracing::warn!(
                "{DEFAULT_OPENAPI_PATH} not found above {}; using relative path",
                cwd.display()
            );
            PathBuf::from(DEFAULT_OPENAPI_PATH)
        }
    }
}

fn find_upwards(start: &Path, relative: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(relative))
        .find(|candidate| candidate.is_file())
}
