//! # apiforge Codegen
//!
//! Target-language code generation from apiforge schemas.
//!
//! This crate provides:
//! - The structured block emitter shared by every backend
//! - Generic signature resolution over inheritance chains
//! - Java, Swift, Spring, JSON repository and Gradle backends

pub mod backend;
pub mod block;
pub mod emit;
pub mod error;
pub mod generics;
pub mod gradle;
pub mod java;
pub mod repository;
pub mod spring;
pub mod swift;

pub use backend::{Backend, BackendArgs, BackendArgument, BackendDescription};
pub use block::{Block, BlockStyle, indent};
pub use error::CodegenError;
pub use generics::GenericResolver;

/// Returns the backends shipped with this crate.
#[must_use]
pub fn builtin_backends() -> Vec<Box<dyn Backend>> {
    vec![
        Box::new(java::JavaBackend),
        Box::new(swift::SwiftBackend),
        Box::new(spring::SpringBackend),
        Box::new(repository::RepositoryBackend),
        Box::new(gradle::GradleBackend::with_default_template()),
    ]
}
