//! Entity definitions and inheritance metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::project::ElementPath;
use crate::types::{Field, FieldType, HttpMethod};

/// Role of an entity in the generated API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A request sent to the server. Carries a path, a method and a
    /// response reference when concrete.
    Request,
    /// A response returned by the server.
    Response,
    /// A plain data object.
    Object,
}

/// An entity declared in a module.
///
/// Entities form an inheritance graph through `parent` references. The
/// graph is required to be acyclic; the model does not defend against
/// cycles. A generic name bound in a `specialization_map` is never
/// re-introduced as unresolved further down the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name.
    pub name: String,
    /// Role of the entity.
    pub kind: EntityKind,
    /// True for entities that only serve as base classes.
    pub is_abstract: bool,
    /// Reference to the parent entity, if any.
    pub parent: Option<ElementPath>,
    /// Generic parameter names this entity introduces, in declaration order.
    pub declared_generics: Vec<String>,
    /// Bindings of ancestor generic names to concrete type expressions.
    pub specialization_map: BTreeMap<String, FieldType>,
    /// Fields declared locally, in declaration (and output) order.
    pub fields_local: Vec<Field>,
    /// URL path of a request entity.
    pub url_path: Option<String>,
    /// HTTP method of a request entity.
    pub method: Option<HttpMethod>,
    /// Response entity of a concrete request.
    pub response: Option<ElementPath>,
    /// Documentation comment.
    pub comment: Option<String>,
}

impl Entity {
    /// Creates an empty entity of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_abstract: false,
            parent: None,
            declared_generics: Vec::new(),
            specialization_map: BTreeMap::new(),
            fields_local: Vec::new(),
            url_path: None,
            method: None,
            response: None,
            comment: None,
        }
    }

    /// Marks the entity abstract.
    #[must_use]
    pub fn abstracted(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Sets the parent entity reference.
    #[must_use]
    pub fn parent(mut self, path: ElementPath) -> Self {
        self.parent = Some(path);
        self
    }

    /// Declares a generic parameter on this entity.
    #[must_use]
    pub fn generic(mut self, name: impl Into<String>) -> Self {
        self.declared_generics.push(name.into());
        self
    }

    /// Binds an ancestor generic name to a concrete type expression.
    #[must_use]
    pub fn specialize(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.specialization_map.insert(name.into(), ty);
        self
    }

    /// Adds a local field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields_local.push(field);
        self
    }

    /// Sets path and method of a request entity.
    #[must_use]
    pub fn route(mut self, method: HttpMethod, path: impl Into<String>) -> Self {
        self.method = Some(method);
        self.url_path = Some(path.into());
        self
    }

    /// Sets the response reference of a request entity.
    #[must_use]
    pub fn response(mut self, path: ElementPath) -> Self {
        self.response = Some(path);
        self
    }

    /// Sets the documentation comment.
    #[must_use]
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }
}
