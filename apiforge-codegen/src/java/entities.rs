//! Java entity class generation.

use apiforge_schema::{ElementPath, Entity, EntityKind, Project};

use crate::block::Block;
use crate::emit::to_block_comment;
use crate::error::CodegenError;
use crate::generics::GenericResolver;
use crate::java::types::{field_lines, java_type_name};

/// Generator for Java entity classes.
pub struct EntityGenerator<'a> {
    project: &'a Project,
}

impl<'a> EntityGenerator<'a> {
    /// Creates a new entity generator.
    #[must_use]
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Generates the class declaration of one entity, without the
    /// per-file package header.
    ///
    /// # Errors
    /// Returns `CodegenError` when generic resolution or the type table
    /// fails.
    pub fn generate(&self, path: &ElementPath, entity: &Entity) -> Result<String, CodegenError> {
        let resolver = GenericResolver::new(self.project, |ty| java_type_name(ty, path));
        let visibility = if entity.is_abstract {
            "public abstract class"
        } else {
            "public class"
        };

        let head = match entity.kind {
            EntityKind::Request => {
                let parent_name = entity
                    .parent
                    .as_ref()
                    .map_or("AbsReq", |p| p.name.as_str());
                let suffix = resolver.declaration_suffix(
                    entity,
                    entity.is_abstract.then_some("R extends AbsRes"),
                )?;
                let extra = if entity.is_abstract {
                    Some("R".to_string())
                } else {
                    entity.response.as_ref().map(|p| p.name.clone())
                };
                let ext = resolver.parent_argument_suffix(entity, extra.as_deref())?;
                format!(
                    "{visibility} {}{suffix} extends {parent_name}{ext} ",
                    entity.name
                )
            }
            EntityKind::Response => {
                let parent_name = entity
                    .parent
                    .as_ref()
                    .map_or("AbsRes", |p| p.name.as_str());
                let suffix = resolver.declaration_suffix(entity, None)?;
                let ext = resolver.parent_argument_suffix(entity, None)?;
                format!(
                    "{visibility} {}{suffix} extends {parent_name}{ext} ",
                    entity.name
                )
            }
            EntityKind::Object => {
                let suffix = resolver.declaration_suffix(entity, None)?;
                match &entity.parent {
                    Some(parent) => {
                        let ext = resolver.parent_argument_suffix(entity, None)?;
                        format!(
                            "{visibility} {}{suffix} extends {}{ext} ",
                            entity.name, parent.name
                        )
                    }
                    None => format!("{visibility} {}{suffix} ", entity.name),
                }
            }
        };

        let mut file = Block::flat("");
        if entity.comment.is_some() {
            file.lines(&to_block_comment(entity.comment.as_deref()));
        }

        let mut class = Block::new(head);
        if entity.kind == EntityKind::Request && !entity.is_abstract {
            self.request_overrides(&mut class, path, entity)?;
        }
        for field in &entity.fields_local {
            for line in field_lines(self.project, field, path)? {
                class.line(line);
            }
        }
        file.push_block(class);

        Ok(file.render())
    }

    /// Emits the `obtainPath`/`obtainMethod`/`obtainResClass` overrides of
    /// a concrete request.
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
        let response = entity.response.as_ref().ok_or_else(|| {
            CodegenError::generation(format!("concrete request '{path}' has no response"))
        })?;

        class.line("@Override");
        class.scope("public String obtainPath() ", |b| {
            b.line(format!("return \"{url_path}\";"));
        });
        class.line("");
        class.line("@Override");
        class.scope("public String obtainMethod() ", |b| {
            b.line(format!("return \"{}\";", method.as_str()));
        });
        class.line("");
        class.line("@Override");
        class.scope(
            format!("public Class<? extends {}> obtainResClass() ", response.name),
            |b| {
                b.line(format!("return {}.class;", response.name));
            },
        );
        class.line("");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_schema::{Field, FieldType, HttpMethod, Module};

    fn request_project() -> Project {
        Project::new("Demo", "1.0.0", "com.example.demo").module(
            Module::new("user")
                .entity(
                    Entity::new("AbsUserReq", EntityKind::Request)
                        .abstracted()
                        .generic("T")
                        .field(Field::new("session", FieldType::Str)),
                )
                .entity(Entity::new("LoginRes", EntityKind::Response))
                .entity(
                    Entity::new("LoginReq", EntityKind::Request)
                        .parent(ElementPath::new("user", "AbsUserReq"))
                        .specialize("T", FieldType::Integer)
                        .route(HttpMethod::Post, "/user/login")
                        .response(ElementPath::new("user", "LoginRes"))
                        .field(Field::new("name", FieldType::Str)),
                ),
        )
    }

    #[test]
    fn test_abstract_request_exposes_bounded_response_parameter() {
        let project = request_project();
        let generator = EntityGenerator::new(&project);
        let path = ElementPath::new("user", "AbsUserReq");
        let entity = project.entity(&path).unwrap();

        let source = generator.generate(&path, entity).unwrap();
        assert!(source.contains(
            "public abstract class AbsUserReq<T, R extends AbsRes> extends AbsReq<R> {"
        ));
        assert!(source.contains("    public String session = \"\";"));
        assert!(!source.contains("obtainPath"));
    }

    #[test]
    fn test_concrete_request_overrides_and_extension() {
        let project = request_project();
        let generator = EntityGenerator::new(&project);
        let path = ElementPath::new("user", "LoginReq");
        let entity = project.entity(&path).unwrap();

        let source = generator.generate(&path, entity).unwrap();
        assert!(source.contains("public class LoginReq extends AbsUserReq<Integer, LoginRes> {"));
        assert!(source.contains("        return \"/user/login\";"));
        assert!(source.contains("        return \"POST\";"));
        assert!(source.contains("public Class<? extends LoginRes> obtainResClass() {"));
        assert!(source.contains("        return LoginRes.class;"));
    }

    #[test]
    fn test_response_without_parent_extends_abs_res() {
        let project = request_project();
        let generator = EntityGenerator::new(&project);
        let path = ElementPath::new("user", "LoginRes");
        let entity = project.entity(&path).unwrap();

        let source = generator.generate(&path, entity).unwrap();
        assert!(source.contains("public class LoginRes extends AbsRes {"));
    }

    #[test]
    fn test_object_without_parent_has_no_extends() {
        let project = Project::new("Demo", "1.0.0", "com.example").module(
            Module::new("api")
                .entity(Entity::new("Profile", EntityKind::Object)),
        );
        let generator = EntityGenerator::new(&project);
        let path = ElementPath::new("api", "Profile");
        let entity = project.entity(&path).unwrap();

        let source = generator.generate(&path, entity).unwrap();
        assert!(source.contains("public class Profile {"));
        assert!(!source.contains("extends"));
    }

    #[test]
    fn test_concrete_request_without_response_fails() {
        let project = Project::new("Demo", "1.0.0", "com.example").module(
            Module::new("api").entity(
                Entity::new("PingReq", EntityKind::Request).route(HttpMethod::Get, "/ping"),
            ),
        );
        let generator = EntityGenerator::new(&project);
        let path = ElementPath::new("api", "PingReq");
        let entity = project.entity(&path).unwrap();

        let err = generator.generate(&path, entity).unwrap_err();
        assert!(matches!(err, CodegenError::Generation { .. }));
    }
}
