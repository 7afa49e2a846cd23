//! # apiforge Schema
//!
//! Abstract API schema model.
//!
//! This crate provides:
//! - Project, module, entity and enum containers
//! - Field type expressions, including unresolved generic placeholders
//! - Inheritance chain traversal for generic resolution
//!
//! The model is constructed programmatically by the caller and consumed
//! read-only by the code generators. It performs no parsing and no
//! validation of its own.

pub mod entity;
pub mod error;
pub mod project;
pub mod types;

pub use entity::{Entity, EntityKind};
pub use error::SchemaError;
pub use project::{ElementPath, Module, Project};
pub use types::{EnumDef, EnumItem, Field, FieldType, FixedValue, HttpMethod};
