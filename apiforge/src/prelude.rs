//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use apiforge::prelude::*;
//! ```

// Schema types
pub use apiforge_schema::{
    ElementPath, Entity, EntityKind, EnumDef, EnumItem, Field, FieldType, FixedValue, HttpMethod,
    Module, Project, SchemaError,
};

// Codegen core
pub use apiforge_codegen::block::{Block, BlockStyle, indent};
pub use apiforge_codegen::error::CodegenError;
pub use apiforge_codegen::generics::GenericResolver;

// Backends
pub use apiforge_codegen::backend::{Backend, BackendArgs, BackendArgument, BackendDescription};
pub use apiforge_codegen::gradle::GradleBackend;
pub use apiforge_codegen::java::JavaBackend;
pub use apiforge_codegen::repository::RepositoryBackend;
pub use apiforge_codegen::spring::SpringBackend;
pub use apiforge_codegen::swift::SwiftBackend;
pub use apiforge_codegen::builtin_backends;
