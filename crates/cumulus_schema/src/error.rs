//! Error types for the schema module.

use thiserror::Error;

/// Result type alias for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while validating resource properties against a registered
/// specification.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    #[error("no property specification registered for resource kind: {0}")]
    UnknownKind(String),

    #[error("required property '{name}' is missing for resource kind '{kind}'")]
    MissingProperty { kind: String, name: String },

    #[error("property '{name}' of resource kind '{kind}' must be a {expected}")]
    WrongType {
        kind: String,
        name: String,
        expected: &'static str,
    },

    #[error("property '{name}' is not declared for resource kind '{kind}'")]
    UndeclaredProperty { kind: String, name: String },
}
