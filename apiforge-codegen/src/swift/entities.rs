//! Swift entity class generation.

use apiforge_schema::{ElementPath, Entity, EntityKind, Project};

use crate::block::Block;
use crate::error::CodegenError;
use crate::generics::GenericResolver;
use crate::swift::types::{field_line, swift_type_name};

/// Generator for Swift entity classes.
pub struct EntityGenerator<'a> {
    project: &'a Project,
}

impl<'a> EntityGenerator<'a> {
    /// Creates a new entity generator.
    #[must_use]
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Appends the class declaration of one entity to the file block.
    ///
    /// # Errors
    /// Returns `CodegenError` when generic resolution or the type table
    /// fails.
    pub fn generate(
        &self,
        file: &mut Block,
        path: &ElementPath,
        entity: &Entity,
    ) -> Result<(), CodegenError> {
        let resolver = GenericResolver::new(self.project, |ty| swift_type_name(ty, path));

        let (parent_default, suffix, ext) = match entity.kind {
            EntityKind::Request => {
                let suffix = resolver
                    .declaration_suffix(entity, entity.is_abstract.then_some("R: AbsRes"))?;
                let extra = if entity.is_abstract {
                    Some("R".to_string())
                } else {
                    entity.response.as_ref().map(|p| p.name.clone())
                };
                let ext = resolver.parent_argument_suffix(entity, extra.as_deref())?;
                ("AbsReq", suffix, ext)
            }
            EntityKind::Response => (
                "AbsRes",
                resolver.declaration_suffix(entity, None)?,
                resolver.parent_argument_suffix(entity, None)?,
            ),
            EntityKind::Object => (
                "AbsBase",
                resolver.declaration_suffix(entity, None)?,
                resolver.parent_argument_suffix(entity, None)?,
            ),
        };
        let parent_name = entity
            .parent
            .as_ref()
            .map_or(parent_default, |p| p.name.as_str());

        let head = format!(
            "public class {}{suffix}: {parent_name}{ext} ",
            entity.name
        );
        let mut class = Block::new(head);

        if entity.kind == EntityKind::Request && !entity.is_abstract {
            self.request_overrides(&mut class, path, entity)?;
        }

        class.scope("public required init?(map: Map) ", |b| {
            b.line("super.init(map: map)");
        });
        class.scope("public required init() ", |b| {
            b.line("super.init()");
        });
        class.line("");

        for field in &entity.fields_local {
            class.line(field_line(self.project, field, path)?);
        }
        class.line("");

        class.scope("public override func mapping(map: Map) ", |b| {
            b.line("super.mapping(map: map)");
            for field in &entity.fields_local {
                let wire_name = field.wire_name.as_deref().unwrap_or(&field.name);
                b.line(format!("{} <- map[\"{wire_name}\"]", field.name));
            }
        });

        file.push_block(class);
        Ok(())
    }

    /// Emits the `obtainPath`/`obtainMethod` overrides of a concrete
    /// request.
    fn request_overrides(
        &self,
        class: &mut Block,
        path: &ElementPath,
        entity: &Entity,
    ) -> Result<(), CodegenError> {
        let url_path = entity.url_path.as_deref().ok_or_else(|| {
            CodegenError::generation(format!("concrete request '{path}' has no path"))
        })?;
        let method = entity.method.ok_or_else(|| {
            CodegenError::generation(format!("concrete request '{path}' has no method"))
        })?;

        class.scope("public override func obtainPath() -> String ", |b| {
            b.line(format!("return \"{url_path}\""));
        });
        class.scope("public override func obtainMethod() -> String ", |b| {
            b.line(format!("return \"{}\"", method.as_str()));
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_schema::{Field, FieldType, HttpMethod, Module};

    fn sample_project() -> Project {
        Project::new("Demo", "1.0.0", "com.example").module(
            Module::new("user")
                .entity(Entity::new("LoginRes", EntityKind::Response))
                .entity(
                    Entity::new("LoginReq", EntityKind::Request)
                        .route(HttpMethod::Post, "/user/login")
                        .response(ElementPath::new("user", "LoginRes"))
                        .field(Field::new("name", FieldType::Str).wire_name("user_name")),
                )
                .entity(Entity::new("Profile", EntityKind::Object)),
        )
    }

    fn generate(name: &str) -> String {
        let project = sample_project();
        let generator = EntityGenerator::new(&project);
        let path = ElementPath::new("user", name);
        let entity = project.entity(&path).unwrap();
        let mut file = Block::flat("");
        generator.generate(&mut file, &path, entity).unwrap();
        file.render()
    }

    #[test]
    fn test_concrete_request_class() {
        let source = generate("LoginReq");
        assert!(source.contains("public class LoginReq: AbsReq<LoginRes> {"));
        assert!(source.contains("    public override func obtainPath() -> String {"));
        assert!(source.contains("        return \"/user/login\""));
        assert!(source.contains("        return \"POST\""));
        assert!(source.contains("    public var name: String = \"\""));
    }

    #[test]
    fn test_mapping_uses_wire_name() {
        let source = generate("LoginReq");
        assert!(source.contains("    public override func mapping(map: Map) {"));
        assert!(source.contains("        super.mapping(map: map)"));
        assert!(source.contains("        name <- map[\"user_name\"]"));
    }

    #[test]
    fn test_object_without_parent_extends_abs_base() {
        let source = generate("Profile");
        assert!(source.contains("public class Profile: AbsBase {"));
    }

    #[test]
    fn test_initializers_are_emitted() {
        let source = generate("LoginRes");
        assert!(source.contains("    public required init?(map: Map) {"));
        assert!(source.contains("        super.init(map: map)"));
        assert!(source.contains("    public required init() {"));
    }
}
