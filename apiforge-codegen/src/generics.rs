//! Generic signature resolution over inheritance chains.
//!
//! When an entity's ancestors declare generic parameters and intermediate
//! entities bind some of them through specialization maps, the entity being
//! emitted must (a) re-declare the names that are still free and (b) supply
//! an argument list to its immediate parent that mixes concrete type names
//! with forwarded placeholders. [`GenericResolver`] computes both suffixes
//! from the schema graph and a backend-supplied type namer.

use apiforge_schema::{Entity, FieldType, Project};

use crate::error::CodegenError;

/// Resolver for generic parameter lists and extension clauses.
///
/// The type namer maps a bound type expression to its textual name in the
/// target language; the resolver calls it as an opaque function and
/// propagates its errors unchanged.
pub struct GenericResolver<'a, F>
where
    F: Fn(&FieldType) -> Result<String, CodegenError>,
{
    project: &'a Project,
    type_namer: F,
}

impl<'a, F> GenericResolver<'a, F>
where
    F: Fn(&FieldType) -> Result<String, CodegenError>,
{
    /// Creates a resolver over the given project and type namer.
    #[must_use]
    pub fn new(project: &'a Project, type_namer: F) -> Self {
        Self {
            project,
            type_namer,
        }
    }

    /// Returns the generic parameter names still unresolved at `entity`:
    /// every name declared along the inheritance chain that no
    /// specialization map up to and including `entity` binds, in the
    /// declaration order inherited from the oldest ancestor.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` when a parent reference dangles.
    pub fn unresolved_generics(&self, entity: &Entity) -> Result<Vec<String>, CodegenError> {
        let chain = self.project.inheritance_chain(entity)?;

        let mut names: Vec<String> = Vec::new();
        for member in &chain {
            for generic in &member.declared_generics {
                names.push(generic.clone());
            }
        }
        for member in &chain {
            for bound in member.specialization_map.keys() {
                names.retain(|n| n != bound);
            }
        }
        Ok(names)
    }

    /// Computes the declaration-site generic parameter list of `entity`
    /// itself: `"<A, B>"` over the unresolved names, `extra` always last,
    /// empty string when there is nothing to declare.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` when a parent reference dangles.
    pub fn declaration_suffix(
        &self,
        entity: &Entity,
        extra: Option<&str>,
    ) -> Result<String, CodegenError> {
        let mut names = self.unresolved_generics(entity)?;
        if let Some(extra) = extra {
            names.push(extra.to_string());
        }
        Ok(join_suffix(&names))
    }

    /// Computes the argument list `entity` supplies to its immediate
    /// parent's generic parameters, in the parent's declared order: bound
    /// names map through the type namer, unbound names are forwarded
    /// literally, `extra` always last. Empty string for a parentless
    /// entity with no `extra`.
    ///
    /// A forwarded name the entity does not itself re-expose is a
    /// malformed specialization and is reported, not repaired.
    ///
    /// # Errors
    /// Returns `CodegenError::MalformedGenericForwarding` for a forwarded
    /// name missing from the entity's own unresolved set, and propagates
    /// type namer and schema lookup errors unchanged.
    pub fn parent_argument_suffix(
        &self,
        entity: &Entity,
        extra: Option<&str>,
    ) -> Result<String, CodegenError> {
        let mut arguments: Vec<String> = Vec::new();

        if let Some(parent_path) = &entity.parent {
            let parent = self
                .project
                .entity(parent_path)
                .ok_or_else(|| apiforge_schema::SchemaError::unknown_entity(parent_path))?;
            let parent_unresolved = self.unresolved_generics(parent)?;
            let own_unresolved = self.unresolved_generics(entity)?;

            for name in parent_unresolved {
                match entity.specialization_map.get(&name) {
                    Some(ty) => arguments.push((self.type_namer)(ty)?),
                    None => {
                        if !own_unresolved.iter().any(|n| n == &name) {
                            return Err(CodegenError::MalformedGenericForwarding {
                                entity: entity.name.clone(),
                                parameter: name,
                            });
                        }
                        arguments.push(name);
                    }
                }
            }
        }

        if let Some(extra) = extra {
            arguments.push(extra.to_string());
        }
        Ok(join_suffix(&arguments))
    }
}

/// Formats a suffix list: empty input renders as the empty string.
fn join_suffix(names: &[String]) -> String {
    if names.is_empty() {
        String::new()
    } else {
        format!("<{}>", names.join(", "))
    }
}
