//! Error types for the template data model.

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while building or serializing templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("resource name must be a non-empty string")]
    InvalidResourceName,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
