//! # apiforge
//!
//! Target-language source generation from abstract API schemas.
//!
//! apiforge turns a programmatically assembled API model (entities,
//! fields, enums, inheritance, generic parameters) into source files for
//! multiple targets: Java classes, Swift classes, Spring resource
//! interfaces, a JSON repository and a ready-to-build Gradle library.
//!
//! ## Quick Start
//!
//! ```
//! use apiforge::prelude::*;
//!
//! let project = Project::new("Demo", "1.0.0", "com.example.demo").module(
//!     Module::new("user")
//!         .entity(Entity::new("LoginRes", EntityKind::Response))
//!         .entity(
//!             Entity::new("LoginReq", EntityKind::Request)
//!                 .route(HttpMethod::Post, "/user/login")
//!                 .response(ElementPath::new("user", "LoginRes"))
//!                 .field(Field::new("name", FieldType::Str)),
//!         ),
//! );
//!
//! let dir = tempfile::tempdir().unwrap();
//! for backend in builtin_backends() {
//!     backend.process(&project, dir.path(), &BackendArgs::new()).unwrap();
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - The abstract API model and chain traversal
//! - [`codegen`] - Block emitter, generic resolver and the backends

pub mod prelude;

/// The abstract API model.
pub mod schema {
    pub use apiforge_schema::*;
}

/// Code generation core and backends.
pub mod codegen {
    pub use apiforge_codegen::*;
}

// Re-export commonly used items at the crate root
pub use apiforge_codegen::{
    Backend, BackendArgs, BackendDescription, Block, BlockStyle, CodegenError, GenericResolver,
    builtin_backends,
};
pub use apiforge_schema::{
    ElementPath, Entity, EntityKind, EnumDef, Field, FieldType, HttpMethod, Module, Project,
    SchemaError,
};
