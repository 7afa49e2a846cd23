//! Error types for schema model lookups.

use thiserror::Error;

/// Error type for schema model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// An element path referenced an entity that does not exist.
    #[error("unknown entity '{module}/{name}'")]
    UnknownEntity {
        /// Module name.
        module: String,
        /// Entity name.
        name: String,
    },

    /// An element path referenced an enum that does not exist.
    #[error("unknown enum '{module}/{name}'")]
    UnknownEnum {
        /// Module name.
        module: String,
        /// Enum name.
        name: String,
    },
}

impl SchemaError {
    /// Creates an unknown-entity error from an element path.
    #[must_use]
    pub fn unknown_entity(path: &crate::project::ElementPath) -> Self {
        Self::UnknownEntity {
            module: path.module.clone(),
            name: path.name.clone(),
        }
    }

    /// Creates an unknown-enum error from an element path.
    #[must_use]
    pub fn unknown_enum(path: &crate::project::ElementPath) -> Self {
        Self::UnknownEnum {
            module: path.module.clone(),
            name: path.name.clone(),
        }
    }
}
