//! Error types for the builder module.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors that can occur while building templates from declarations.
#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("reference to unknown resource '{name}' of kind '{kind}'")]
    UnknownReference { kind: String, name: String },

    #[error("unknown environment: {0}")]
    InvalidEnvironment(String),

    #[error("invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    #[error("invalid property declaration: {0}")]
    InvalidProperty(String),

    #[error("template error: {0}")]
    Template(#[from] cumulus_template::TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
