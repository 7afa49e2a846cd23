//! Generates every target for a small demo project.
//!
//! Builds a two-module API model with inheritance and generic parameters,
//! then runs all builtin backends against it.
//!
//! Run with: cargo run --example generate_all

use apiforge::prelude::*;
use std::path::Path;

fn demo_project() -> Project {
    let base = Module::new("base")
        .entity(
            Entity::new("PagedReq", EntityKind::Request)
                .abstracted()
                .generic("T")
                .field(Field::new("page", FieldType::Integer))
                .field(Field::new("pageSize", FieldType::Integer).fixed(FixedValue::Int(20)))
                .comment("Base class for paginated requests"),
        )
        .entity(
            Entity::new("PagedRes", EntityKind::Response)
                .abstracted()
                .field(Field::new("total", FieldType::Long)),
        );

    let user = Module::new("user")
        .enum_def(
            EnumDef::new("UserState")
                .item("Active", 1)
                .item("Suspended", 2),
        )
        .entity(
            Entity::new("User", EntityKind::Object)
                .field(Field::new("id", FieldType::Id))
                .field(Field::new("name", FieldType::Str))
                .field(
                    Field::new("state", FieldType::Enum(ElementPath::new("user", "UserState")))
                        .optional(),
                ),
        )
        .entity(
            Entity::new("ListUsersRes", EntityKind::Response)
                .parent(ElementPath::new("base", "PagedRes"))
                .field(Field::new(
                    "users",
                    FieldType::list_of(FieldType::Object(ElementPath::new("user", "User"))),
                )),
        )
        .entity(
            Entity::new("ListUsersReq", EntityKind::Request)
                .parent(ElementPath::new("base", "PagedReq"))
                .specialize("T", FieldType::Str)
                .route(HttpMethod::Get, "/users")
                .response(ElementPath::new("user", "ListUsersRes"))
                .field(Field::new("filter", FieldType::Str).optional()),
        );

    Project::new("Demo", "1.0.0", "com.example.demo")
        .module(base)
        .module(user)
}

fn main() -> Result<(), CodegenError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let project = demo_project();
    let output = Path::new("target/demo-output");

    for backend in builtin_backends() {
        let description = backend.description();
        println!("running {} backend ({})", description.name, description.description);
        backend.process(&project, output, &BackendArgs::new())?;
    }

    println!("generated sources under {}", output.display());
    Ok(())
}
