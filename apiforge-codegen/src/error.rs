//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema lookup error.
    #[error("schema error: {0}")]
    Schema(#[from] apiforge_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parent generic parameter is forwarded but never re-declared by the
    /// entity, so callers could not supply it.
    #[error("entity '{entity}' forwards generic parameter '{parameter}' without re-declaring it")]
    MalformedGenericForwarding {
        /// Qualified entity name.
        entity: String,
        /// Offending generic parameter name.
        parameter: String,
    },

    /// The backend type table cannot map a type expression.
    #[error("unknown type '{type_name}' in '{context}'")]
    UnknownType {
        /// Textual form of the type expression.
        type_name: String,
        /// Qualified name of the element being generated.
        context: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unknown-type error.
    pub fn unknown_type(type_name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            context: context.into(),
        }
    }
}
