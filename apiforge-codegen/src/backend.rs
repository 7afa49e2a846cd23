//! Backend trait and descriptions.
//!
//! A backend turns a project into files for one target. Backends receive an
//! already-parsed key/value argument map; command line handling lives with
//! the caller.

use std::collections::BTreeMap;
use std::path::Path;

use apiforge_schema::Project;

use crate::error::CodegenError;

/// Arguments handed to a backend. Flag-only arguments map to empty values.
pub type BackendArgs = BTreeMap<String, String>;

/// An argument a backend understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendArgument {
    /// Argument tag.
    pub tag: &'static str,
    /// True when the argument carries a value.
    pub with_value: bool,
    /// Human-readable description.
    pub description: &'static str,
}

/// Description of a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDescription {
    /// Backend name; also the sub-directory it generates into.
    pub name: &'static str,
    /// Single-letter abbreviation.
    pub abbreviation: &'static str,
    /// Backend version.
    pub version: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Arguments the backend understands.
    pub arguments: Vec<BackendArgument>,
}

/// A code generation backend.
pub trait Backend {
    /// Returns the description of this backend.
    fn description(&self) -> BackendDescription;

    /// Convenient access to the backend name.
    fn name(&self) -> &'static str {
        self.description().name
    }

    /// Generates code for the project under `output_dir`. Each backend
    /// writes into its own sub-directory named after itself.
    ///
    /// # Errors
    /// Returns `CodegenError` when resolution or file writing fails.
    fn process(
        &self,
        project: &Project,
        output_dir: &Path,
        args: &BackendArgs,
    ) -> Result<(), CodegenError>;
}
