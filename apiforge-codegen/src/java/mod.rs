//! Java code generation backend.
//!
//! Generates one `.java` file per entity and per enum, all in the target
//! package directory, plus the `AbsReq`/`AbsRes` base classes every
//! generated request and response hangs from.

pub mod entities;
pub mod enums;
pub mod types;

use std::path::{Path, PathBuf};

use apiforge_schema::Project;

use crate::backend::{Backend, BackendArgs, BackendDescription};
use crate::emit::{reset_dir, write_source_file};
use crate::error::CodegenError;

pub use entities::EntityGenerator;
pub use enums::EnumGenerator;

const ABS_REQ: &str = "\npublic abstract class AbsReq<R extends AbsRes> {
    public abstract String obtainPath();
    public abstract String obtainMethod();
    public abstract Class<? extends R> obtainResClass();
    public abstract Hashtable<String, String> obtainExtra();
}
";

const ABS_RES: &str = "\npublic abstract class AbsRes {
    public abstract int obtainSuccessCode();
    public abstract Hashtable<String, String> obtainExtra();
}
";

/// Java backend.
pub struct JavaBackend;

impl Backend for JavaBackend {
    fn description(&self) -> BackendDescription {
        BackendDescription {
            name: "java",
            abbreviation: "j",
            version: "1.0.0",
            description: "Generate Java code.",
            arguments: Vec::new(),
        }
    }

    fn process(
        &self,
        project: &Project,
        output_dir: &Path,
        _args: &BackendArgs,
    ) -> Result<(), CodegenError> {
        JavaProcessor::new(project, output_dir).process()
    }
}

/// Writes a project as Java sources under `<output_dir>/java`.
///
/// Also driven directly by the Spring and Gradle backends, which point it
/// at their own source roots.
pub(crate) struct JavaProcessor<'a> {
    project: &'a Project,
    root_dir: PathBuf,
    package_dir: PathBuf,
}

impl<'a> JavaProcessor<'a> {
    /// Creates a processor rooted at `<output_dir>/java`.
    pub fn new(project: &'a Project, output_dir: &Path) -> Self {
        let root_dir = output_dir.join("java");
        let mut package_dir = root_dir.clone();
        for part in project.target_package.split('.') {
            package_dir.push(part);
        }
        Self {
            project,
            root_dir,
            package_dir,
        }
    }

    /// Writes `text` into `<package_dir>/<name>.java` under the package
    /// header.
    fn write_java_file(&self, name: &str, text: &str) -> Result<(), CodegenError> {
        let path = self.package_dir.join(format!("{name}.java"));
        let content = format!(
            "package {};\nimport java.util.*;\n{text}",
            self.project.target_package
        );
        write_source_file(&path, &content)
    }

    /// Generates every file of the Java output.
    pub fn process(&self) -> Result<(), CodegenError> {
        reset_dir(&self.root_dir)?;

        self.write_java_file("AbsReq", ABS_REQ)?;
        self.write_java_file("AbsRes", ABS_RES)?;

        let entity_generator = EntityGenerator::new(self.project);
        for (path, entity) in self.project.flat_entities() {
            let source = entity_generator.generate(&path, entity)?;
            self.write_java_file(&path.name, &source)?;
        }

        let enum_generator = EnumGenerator::new();
        for (path, enu) in self.project.flat_enums() {
            let source = enum_generator.generate(&path, enu);
            self.write_java_file(&path.name, &source)?;
        }

        tracing::info!(
            "generated Java sources for '{}' in {}",
            self.project.name,
            self.package_dir.display()
        );
        Ok(())
    }
}
