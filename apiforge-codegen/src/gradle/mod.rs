//! Gradle library project backend.
//!
//! Copies the bundled Gradle template, fills in the project placeholders
//! and generates the Java sources into `gradle/library/src/main`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use apiforge_schema::Project;

use crate::backend::{Backend, BackendArgs, BackendArgument, BackendDescription};
use crate::emit::{copy_dir_all, rewrite_file};
use crate::error::CodegenError;
use crate::java::JavaProcessor;

/// Gradle backend.
pub struct GradleBackend {
    template_dir: PathBuf,
}

impl GradleBackend {
    /// Creates a backend using the given template directory.
    #[must_use]
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    /// Creates a backend using the template bundled with this crate.
    #[must_use]
    pub fn with_default_template() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/gradle"))
    }
}

impl Backend for GradleBackend {
    fn description(&self) -> BackendDescription {
        BackendDescription {
            name: "gradle",
            abbreviation: "g",
            version: "1.0.0",
            description: "Generate a Java library using Gradle.",
            arguments: vec![BackendArgument {
                tag: "inc",
                with_value: false,
                description: "Incremental, do not copy config files",
            }],
        }
    }

    fn process(
        &self,
        project: &Project,
        output_dir: &Path,
        args: &BackendArgs,
    ) -> Result<(), CodegenError> {
        let dst_dir = output_dir.join(self.name());
        let java_dir = dst_dir.join("library/src/main");

        if !args.contains_key("inc") {
            copy_dir_all(&self.template_dir, &dst_dir)?;

            let mut replacements = BTreeMap::new();
            replacements.insert("{{project_name}}", project.name.as_str());
            replacements.insert("{{project_version}}", project.version.as_str());
            replacements.insert("{{project_package}}", project.target_package.as_str());

            rewrite_file(
                &self.template_dir.join("settings.gradle"),
                &dst_dir.join("settings.gradle"),
                &replacements,
            )?;
            rewrite_file(
                &self.template_dir.join("library/build.gradle"),
                &dst_dir.join("library/build.gradle"),
                &replacements,
            )?;
        }

        JavaProcessor::new(project, &java_dir).process()?;

        tracing::info!(
            "generated Gradle library for '{}' in {}",
            project.name,
            dst_dir.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_schema::{Entity, EntityKind, Module};
    use std::fs;

    fn sample_project() -> Project {
        Project::new("Demo", "1.2.3", "com.example.demo")
            .module(Module::new("api").entity(Entity::new("Profile", EntityKind::Object)))
    }

    #[test]
    fn test_process_copies_template_and_fills_placeholders() {
        let project = sample_project();
        let dir = tempfile::tempdir().unwrap();
        GradleBackend::with_default_template()
            .process(&project, dir.path(), &BTreeMap::new())
            .unwrap();

        let settings =
            fs::read_to_string(dir.path().join("gradle/settings.gradle")).unwrap();
        assert!(settings.contains("rootProject.name = 'Demo'"));

        let build =
            fs::read_to_string(dir.path().join("gradle/library/build.gradle")).unwrap();
        assert!(build.contains("group = 'com.example.demo'"));
        assert!(build.contains("version = '1.2.3'"));

        assert!(
            dir.path()
                .join("gradle/library/src/main/java/com/example/demo/Profile.java")
                .exists()
        );
    }

    #[test]
    fn test_incremental_skips_template_copy() {
        let project = sample_project();
        let dir = tempfile::tempdir().unwrap();
        let mut args = BTreeMap::new();
        args.insert("inc".to_string(), String::new());
        GradleBackend::with_default_template()
            .process(&project, dir.path(), &args)
            .unwrap();

        assert!(!dir.path().join("gradle/settings.gradle").exists());
        assert!(
            dir.path()
                .join("gradle/library/src/main/java/com/example/demo/AbsReq.java")
                .exists()
        );
    }
}
