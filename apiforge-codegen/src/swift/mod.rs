//! Swift code generation backend.
//!
//! Generates a single `<Project>Entities.swift` file holding the
//! `AbsBase`/`AbsReq`/`AbsRes` preamble, every entity as an
//! ObjectMapper-style class and every enum.

pub mod entities;
pub mod enums;
pub mod types;

use std::path::Path;

use apiforge_schema::Project;

use crate::backend::{Backend, BackendArgs, BackendDescription};
use crate::block::Block;
use crate::emit::{reset_dir, write_source_file};
use crate::error::CodegenError;

pub use entities::EntityGenerator;
pub use enums::EnumGenerator;

const PREAMBLE: &str = "public class AbsBase: NSObject, Mappable {
    public required init?(map: Map){}
    public override required init(){}
    public func mapping(map: Map){}
    public func obtainExtra() -> [String:String] { return [String:String]() }
}

public class AbsReq<T: AbsRes>: AbsBase {
    public func obtainPath() -> String { return \"\" }
    public func obtainMethod() -> String { return \"\" }
    public func obtainRes(json: String) -> T? { return Mapper<T>().map(JSONString: json) }

    public required init?(map: Map) {
        super.init(map: map)
    }

    public required init() {
        super.init()
    }

    public override func mapping(map: Map) {
        super.mapping(map: map)
    }
}

public class AbsRes: AbsBase {
    public func obtainSuccessCode() -> Int { return 200 }

    public required init?(map: Map) {
        super.init(map: map)
    }

    public required init() {
        super.init()
    }

    public override func mapping(map: Map) {
        super.mapping(map: map)
    }
}";

/// Swift backend.
pub struct SwiftBackend;

impl Backend for SwiftBackend {
    fn description(&self) -> BackendDescription {
        BackendDescription {
            name: "swift",
            abbreviation: "s",
            version: "1.0.0",
            description: "Generate Swift code.",
            arguments: Vec::new(),
        }
    }

    fn process(
        &self,
        project: &Project,
        output_dir: &Path,
        _args: &BackendArgs,
    ) -> Result<(), CodegenError> {
        let root_dir = output_dir.join(self.name());
        reset_dir(&root_dir)?;

        let source = generate_entities_file(project)?;
        let file_path = root_dir.join(format!("{}Entities.swift", project.name));
        write_source_file(&file_path, &source)?;

        tracing::info!(
            "generated Swift sources for '{}' in {}",
            project.name,
            root_dir.display()
        );
        Ok(())
    }
}

/// Renders the complete entities file for a project.
///
/// # Errors
/// Returns `CodegenError` when generic resolution or the type table fails.
pub fn generate_entities_file(project: &Project) -> Result<String, CodegenError> {
    let mut file = Block::flat("");
    file.lines(PREAMBLE);

    let entity_generator = EntityGenerator::new(project);
    for (path, entity) in project.flat_entities() {
        entity_generator.generate(&mut file, &path, entity)?;
    }

    let enum_generator = EnumGenerator::new();
    for (path, enu) in project.flat_enums() {
        enum_generator.generate(&mut file, &path, enu);
    }

    Ok(file.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_schema::{
        ElementPath, Entity, EntityKind, EnumDef, Field, FieldType, HttpMethod, Module,
    };
    use std::collections::BTreeMap;
    use std::fs;

    fn sample_project() -> Project {
        Project::new("Demo", "1.0.0", "com.example").module(
            Module::new("user")
                .entity(Entity::new("LoginRes", EntityKind::Response))
                .entity(
                    Entity::new("LoginReq", EntityKind::Request)
                        .route(HttpMethod::Post, "/user/login")
                        .response(ElementPath::new("user", "LoginRes"))
                        .field(Field::new("name", FieldType::Str)),
                )
                .enum_def(EnumDef::new("Role").item("Admin", 1)),
        )
    }

    #[test]
    fn test_entities_file_contains_preamble_entities_and_enums() {
        let source = generate_entities_file(&sample_project()).unwrap();

        assert!(source.contains("public class AbsBase: NSObject, Mappable {"));
        assert!(source.contains("public class AbsReq<T: AbsRes>: AbsBase {"));
        assert!(source.contains("public class LoginReq: AbsReq<LoginRes> {"));
        assert!(source.contains("public enum Role: String {"));

        // Top-level declarations stay unindented in the flat container.
        assert!(source.contains("\npublic class LoginRes: AbsRes {"));
    }

    #[test]
    fn test_process_writes_single_file() {
        let project = sample_project();
        let dir = tempfile::tempdir().unwrap();
        SwiftBackend
            .process(&project, dir.path(), &BTreeMap::new())
            .unwrap();

        let file_path = dir.path().join("swift/DemoEntities.swift");
        let content = fs::read_to_string(file_path).unwrap();
        assert!(content.contains("public class LoginReq: AbsReq<LoginRes> {"));
    }
}
