//! Spring resource interface generation backend.
//!
//! Generates one `I<Module>Resource` interface per module, listing every
//! concrete request with a mappable HTTP method. With the `api` argument it
//! also runs the Java backend under `spring/src/main` so the interfaces and
//! the entity classes land in the same source tree.

use std::path::{Path, PathBuf};

use apiforge_schema::{EntityKind, HttpMethod, Module, Project};

use crate::backend::{Backend, BackendArgs, BackendArgument, BackendDescription};
use crate::block::Block;
use crate::emit::{reset_dir, write_source_file};
use crate::error::CodegenError;
use crate::java::JavaProcessor;

/// Spring backend.
pub struct SpringBackend;

impl Backend for SpringBackend {
    fn description(&self) -> BackendDescription {
        BackendDescription {
            name: "spring",
            abbreviation: "p",
            version: "1.0.0",
            description: "Generate Spring Boot code.",
            arguments: vec![
                BackendArgument {
                    tag: "pkg",
                    with_value: true,
                    description: "The package name for Spring code (defaults to the API package)",
                },
                BackendArgument {
                    tag: "inc",
                    with_value: false,
                    description: "Incremental, do not clean existing output",
                },
                BackendArgument {
                    tag: "api",
                    with_value: false,
                    description: "Also generate API code",
                },
            ],
        }
    }

    fn process(
        &self,
        project: &Project,
        output_dir: &Path,
        args: &BackendArgs,
    ) -> Result<(), CodegenError> {
        if args.contains_key("api") {
            let api_root = output_dir.join(self.name()).join("src/main");
            JavaProcessor::new(project, &api_root).process()?;
        }
        SpringProcessor::new(project, output_dir, args).process()
    }
}

/// Writes the resource interfaces of a project.
struct SpringProcessor<'a> {
    project: &'a Project,
    args: &'a BackendArgs,
    root_dir: PathBuf,
    package: String,
    package_dir: PathBuf,
}

impl<'a> SpringProcessor<'a> {
    fn new(project: &'a Project, output_dir: &Path, args: &'a BackendArgs) -> Self {
        let root_dir = output_dir.join("spring");
        let package = args
            .get("pkg")
            .cloned()
            .unwrap_or_else(|| project.target_package.clone());
        let mut package_dir = root_dir.join("src/main/java");
        for part in package.split('.') {
            package_dir.push(part);
        }
        Self {
            project,
            args,
            root_dir,
            package,
            package_dir,
        }
    }

    /// Returns the mapping annotation stem for a method, `None` for the
    /// methods Spring has no mapping annotation for.
    fn mapping_stem(method: HttpMethod) -> Option<&'static str> {
        match method {
            HttpMethod::Get => Some("Get"),
            HttpMethod::Post => Some("Post"),
            HttpMethod::Put => Some("Put"),
            HttpMethod::Delete => Some("Delete"),
            HttpMethod::Head | HttpMethod::Connect | HttpMethod::Options => None,
        }
    }

    /// Renders the resource interface of one module.
    fn interface_source(&self, module: &Module, interface: &str) -> Result<String, CodegenError> {
        let mut file = Block::flat("");
        file.line(format!("import {}.*;", self.project.target_package));
        file.line("import org.springframework.web.bind.annotation.*;");
        file.line("");

        let mut body = Block::new(format!("public interface {interface} "));
        for entity in &module.entities {
            if entity.kind != EntityKind::Request || entity.is_abstract {
                continue;
            }
            let Some(stem) = entity.method.and_then(Self::mapping_stem) else {
                continue;
            };
            let Some(response) = &entity.response else {
                continue;
            };
            let url_path = entity.url_path.as_deref().ok_or_else(|| {
                CodegenError::generation(format!(
                    "concrete request '{}/{}' has no path",
                    module.name, entity.name
                ))
            })?;

            body.line(format!("@{stem}Mapping(\"{url_path}\")"));
            body.line(format!(
                "public {} retrieve{}(@RequestBody {} req);",
                response.name, response.name, entity.name
            ));
            body.line("");
        }
        file.push_block(body);
        Ok(file.render())
    }

    fn process(&self) -> Result<(), CodegenError> {
        // Cleaning the tree would destroy the Java sources written by the
        // `api` pass, and `inc` asks for existing output to be kept.
        if !self.args.contains_key("api") && !self.args.contains_key("inc") {
            reset_dir(&self.root_dir)?;
        }

        for module in &self.project.modules {
            let interface = format!("I{}Resource", module.name);
            let source = self.interface_source(module, &interface)?;
            let path = self.package_dir.join(format!("{interface}.java"));
            let content = format!("package {};\n{source}", self.package);
            write_source_file(&path, &content)?;
        }

        tracing::info!(
            "generated Spring resources for '{}' in {}",
            self.project.name,
            self.package_dir.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_schema::{ElementPath, Entity, Field, FieldType};
    use std::collections::BTreeMap;
    use std::fs;

    fn sample_project() -> Project {
        Project::new("Demo", "1.0.0", "com.example.demo").module(
            Module::new("user")
                .entity(Entity::new("LoginRes", EntityKind::Response))
                .entity(
                    Entity::new("LoginReq", EntityKind::Request)
                        .route(HttpMethod::Post, "/user/login")
                        .response(ElementPath::new("user", "LoginRes"))
                        .field(Field::new("name", FieldType::Str)),
                )
                .entity(
                    Entity::new("PingReq", EntityKind::Request)
                        .route(HttpMethod::Head, "/ping")
                        .response(ElementPath::new("user", "LoginRes")),
                )
                .entity(
                    Entity::new("AbsApiReq", EntityKind::Request)
                        .abstracted()
                        .route(HttpMethod::Post, "/abs"),
                ),
        )
    }

    #[test]
    fn test_interface_lists_only_mappable_concrete_requests() {
        let project = sample_project();
        let dir = tempfile::tempdir().unwrap();
        SpringBackend
            .process(&project, dir.path(), &BTreeMap::new())
            .unwrap();

        let path = dir
            .path()
            .join("spring/src/main/java/com/example/demo/IuserResource.java");
        let content = fs::read_to_string(path).unwrap();

        assert!(content.starts_with("package com.example.demo;\n"));
        assert!(content.contains("public interface IuserResource {"));
        assert!(content.contains("    @PostMapping(\"/user/login\")"));
        assert!(content.contains("    public LoginRes retrieveLoginRes(@RequestBody LoginReq req);"));
        // HEAD has no mapping annotation, abstract requests are skipped.
        assert!(!content.contains("PingReq"));
        assert!(!content.contains("AbsApiReq"));
    }

    #[test]
    fn test_pkg_argument_overrides_package() {
        let project = sample_project();
        let dir = tempfile::tempdir().unwrap();
        let mut args = BTreeMap::new();
        args.insert("pkg".to_string(), "com.acme.web".to_string());
        SpringBackend.process(&project, dir.path(), &args).unwrap();

        let path = dir
            .path()
            .join("spring/src/main/java/com/acme/web/IuserResource.java");
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("package com.acme.web;\n"));
        // Entity imports still come from the API package.
        assert!(content.contains("import com.example.demo.*;"));
    }

    #[test]
    fn test_api_argument_also_generates_java_sources() {
        let project = sample_project();
        let dir = tempfile::tempdir().unwrap();
        let mut args = BTreeMap::new();
        args.insert("api".to_string(), String::new());
        SpringBackend.process(&project, dir.path(), &args).unwrap();

        assert!(
            dir.path()
                .join("spring/src/main/java/com/example/demo/LoginReq.java")
                .exists()
        );
        assert!(
            dir.path()
                .join("spring/src/main/java/com/example/demo/IuserResource.java")
                .exists()
        );
    }
}
