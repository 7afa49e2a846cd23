//! Project and module containers.
//!
//! The project is the root of the schema graph: an ordered list of modules,
//! each holding entities and enums in declaration order. Declaration order
//! is output order for every backend, so nothing here reorders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::SchemaError;
use crate::types::EnumDef;

/// Qualified reference to an entity or enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementPath {
    /// Module name.
    pub module: String,
    /// Element name within the module.
    pub name: String,
}

impl ElementPath {
    /// Creates an element path.
    #[must_use]
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.module, self.name)
    }
}

/// A named group of entities and enums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Module name.
    pub name: String,
    /// Entities in declaration order.
    pub entities: Vec<Entity>,
    /// Enums in declaration order.
    pub enums: Vec<EnumDef>,
}

impl Module {
    /// Creates an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Adds an entity.
    #[must_use]
    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Adds an enum.
    #[must_use]
    pub fn enum_def(mut self, enu: EnumDef) -> Self {
        self.enums.push(enu);
        self
    }
}

/// Root of the schema graph.
///
/// Owned by the caller and read-only from the code generator's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Project version string.
    pub version: String,
    /// Target package (namespace) for generated code.
    pub target_package: String,
    /// Modules in declaration order.
    pub modules: Vec<Module>,
}

impl Project {
    /// Creates an empty project.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        target_package: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            target_package: target_package.into(),
            modules: Vec::new(),
        }
    }

    /// Adds a module.
    #[must_use]
    pub fn module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    /// Looks up an entity by element path.
    #[must_use]
    pub fn entity(&self, path: &ElementPath) -> Option<&Entity> {
        self.modules
            .iter()
            .find(|m| m.name == path.module)
            .and_then(|m| m.entities.iter().find(|e| e.name == path.name))
    }

    /// Looks up an enum by element path.
    #[must_use]
    pub fn enum_def(&self, path: &ElementPath) -> Option<&EnumDef> {
        self.modules
            .iter()
            .find(|m| m.name == path.module)
            .and_then(|m| m.enums.iter().find(|e| e.name == path.name))
    }

    /// Iterates all entities across modules in declaration order.
    pub fn flat_entities(&self) -> impl Iterator<Item = (ElementPath, &Entity)> {
        self.modules.iter().flat_map(|m| {
            m.entities
                .iter()
                .map(move |e| (ElementPath::new(m.name.clone(), e.name.clone()), e))
        })
    }

    /// Iterates all enums across modules in declaration order.
    pub fn flat_enums(&self) -> impl Iterator<Item = (ElementPath, &EnumDef)> {
        self.modules.iter().flat_map(|m| {
            m.enums
                .iter()
                .map(move |e| (ElementPath::new(m.name.clone(), e.name.clone()), e))
        })
    }

    /// Returns the inheritance chain of `entity`, oldest ancestor first and
    /// the entity itself last.
    ///
    /// The chain walk trusts the acyclicity invariant of the model and adds
    /// no cycle detection.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownEntity` when a parent reference dangles.
    pub fn inheritance_chain<'a>(
        &'a self,
        entity: &'a Entity,
    ) -> Result<Vec<&'a Entity>, SchemaError> {
        let mut chain = vec![entity];
        let mut current = entity;
        while let Some(parent_path) = &current.parent {
            let parent = self
                .entity(parent_path)
                .ok_or_else(|| SchemaError::unknown_entity(parent_path))?;
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        Ok(chain)
    }
}
