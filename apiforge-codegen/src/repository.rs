//! JSON repository backend.
//!
//! Dumps the project as a versioned JSON file and maintains a `list.json`
//! index mapping every published version to its file. Existing versions in
//! the index are preserved so a repository can accumulate history.

use std::fs;
use std::path::Path;

use apiforge_schema::Project;
use serde_json::{Map, Value, json};

use crate::backend::{Backend, BackendArgs, BackendDescription};
use crate::error::CodegenError;

/// Repository backend.
pub struct RepositoryBackend;

impl Backend for RepositoryBackend {
    fn description(&self) -> BackendDescription {
        BackendDescription {
            name: "repository",
            abbreviation: "r",
            version: "1.0.0",
            description: "Generate a JSON repository.",
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
        fs::create_dir_all(&root_dir)?;

        let list_path = root_dir.join("list.json");
        let project_file_name = format!("project-{}.json", project.version);

        let mut versions = existing_versions(&list_path)?;
        versions.insert(
            project.version.clone(),
            Value::String(format!("{}/{project_file_name}", self.name())),
        );
        let index = json!({
            "current": project.version,
            "versions": versions,
        });

        fs::write(&list_path, serde_json::to_string_pretty(&index)?)?;
        fs::write(
            root_dir.join(&project_file_name),
            serde_json::to_string_pretty(project)?,
        )?;

        tracing::info!(
            "published project '{}' version {} to {}",
            project.name,
            project.version,
            root_dir.display()
        );
        Ok(())
    }
}

/// Reads the versions table of an existing index, empty when there is none.
fn existing_versions(list_path: &Path) -> Result<Map<String, Value>, CodegenError> {
    if !list_path.exists() {
        return Ok(Map::new());
    }
    let index: Value = serde_json::from_str(&fs::read_to_string(list_path)?)?;
    Ok(index
        .get("versions")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_schema::{Entity, EntityKind, Module};
    use std::collections::BTreeMap;

    fn project(version: &str) -> Project {
        Project::new("Demo", version, "com.example")
            .module(Module::new("api").entity(Entity::new("Profile", EntityKind::Object)))
    }

    #[test]
    fn test_process_writes_index_and_dump() {
        let dir = tempfile::tempdir().unwrap();
        RepositoryBackend
            .process(&project("1.0.0"), dir.path(), &BTreeMap::new())
            .unwrap();

        let root = dir.path().join("repository");
        let index: Value =
            serde_json::from_str(&fs::read_to_string(root.join("list.json")).unwrap()).unwrap();
        assert_eq!(index["current"], "1.0.0");
        assert_eq!(index["versions"]["1.0.0"], "repository/project-1.0.0.json");

        let dump: Value =
            serde_json::from_str(&fs::read_to_string(root.join("project-1.0.0.json")).unwrap())
                .unwrap();
        assert_eq!(dump["name"], "Demo");
        assert_eq!(dump["modules"][0]["name"], "api");
    }

    #[test]
    fn test_republishing_keeps_older_versions() {
        let dir = tempfile::tempdir().unwrap();
        let args = BTreeMap::new();
        RepositoryBackend
            .process(&project("1.0.0"), dir.path(), &args)
            .unwrap();
        RepositoryBackend
            .process(&project("2.0.0"), dir.path(), &args)
            .unwrap();

        let root = dir.path().join("repository");
        let index: Value =
            serde_json::from_str(&fs::read_to_string(root.join("list.json")).unwrap()).unwrap();
        assert_eq!(index["current"], "2.0.0");
        assert_eq!(index["versions"]["1.0.0"], "repository/project-1.0.0.json");
        assert_eq!(index["versions"]["2.0.0"], "repository/project-2.0.0.json");
        assert!(root.join("project-1.0.0.json").exists());
    }
}
