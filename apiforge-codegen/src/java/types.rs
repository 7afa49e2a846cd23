//! Java type tables and field line generation.

use apiforge_schema::{ElementPath, Field, FieldType, FixedValue, Project};

use crate::error::CodegenError;

/// Maps a field type to the boxed Java type name used in generic argument
/// and optional positions.
///
/// A list names its member type here; nested lists are rejected.
///
/// # Errors
/// Returns `CodegenError::Generation` for a list of lists.
pub fn java_type_name(ty: &FieldType, context: &ElementPath) -> Result<String, CodegenError> {
    Ok(match ty {
        FieldType::Boolean => "Boolean".to_string(),
        FieldType::Integer => "Integer".to_string(),
        FieldType::Long | FieldType::Id => "Long".to_string(),
        FieldType::Double => "Double".to_string(),
        FieldType::Str | FieldType::Url | FieldType::DateTime => "String".to_string(),
        FieldType::StringMap => "HashMap<String, String>".to_string(),
        FieldType::Enum(path) | FieldType::Object(path) => path.name.clone(),
        FieldType::Unresolved(name) => name.clone(),
        FieldType::List(member) => member_type_name(member, context)?,
    })
}

/// Maps a list member type to its Java name.
///
/// # Errors
/// Returns `CodegenError::Generation` for a list of lists.
pub fn member_type_name(member: &FieldType, context: &ElementPath) -> Result<String, CodegenError> {
    if matches!(member, FieldType::List(_)) {
        return Err(CodegenError::generation(format!(
            "list can not contain list in '{context}'"
        )));
    }
    java_type_name(member, context)
}

/// Generates the Java declaration line of a field pinned to a fixed value.
fn fixed_field_line(
    field: &Field,
    value: &FixedValue,
    context: &ElementPath,
) -> Result<String, CodegenError> {
    let name = &field.name;
    let line = match (&field.ty, value) {
        (FieldType::Boolean, FixedValue::Bool(v)) => {
            format!("public final boolean {name} = {v};")
        }
        (FieldType::Integer, FixedValue::Int(v)) => format!("public final int {name} = {v};"),
        (FieldType::Long | FieldType::Id, FixedValue::Int(v)) => {
            format!("public final long {name} = {v}L;")
        }
        (FieldType::Double, FixedValue::Float(v)) => {
            format!("public final double {name} = {v};")
        }
        (FieldType::Str | FieldType::Url | FieldType::DateTime, FixedValue::Text(v)) => {
            format!("public final String {name} = \"{v}\";")
        }
        _ => {
            return Err(CodegenError::generation(format!(
                "field '{name}' in '{context}' can not have a fixed value of this type"
            )));
        }
    };
    Ok(line)
}

/// Generates the Java declaration line of an optional field.
fn optional_field_line(field: &Field, context: &ElementPath) -> Result<String, CodegenError> {
    let name = &field.name;
    let line = match &field.ty {
        FieldType::List(member) => format!(
            "public List<{}> {name} = null;",
            member_type_name(member, context)?
        ),
        ty => format!("public {} {name} = null;", java_type_name(ty, context)?),
    };
    Ok(line)
}

/// Generates the Java declaration line of a required field with its
/// target-side default value.
fn default_field_line(
    project: &Project,
    field: &Field,
    context: &ElementPath,
) -> Result<String, CodegenError> {
    let name = &field.name;
    let line = match &field.ty {
        FieldType::Boolean => format!("public boolean {name};"),
        FieldType::Integer => format!("public int {name};"),
        FieldType::Long | FieldType::Id => format!("public long {name};"),
        FieldType::Double => format!("public double {name};"),
        FieldType::Str | FieldType::Url | FieldType::DateTime => {
            format!("public String {name} = \"\";")
        }
        FieldType::StringMap => {
            format!("public HashMap<String, String> {name} = new HashMap<>();")
        }
        FieldType::Object(path) => format!("public {} {name} = null;", path.name),
        FieldType::Unresolved(unresolved) => format!("public {unresolved} {name} = null;"),
        FieldType::List(member) => format!(
            "public List<{}> {name} = new LinkedList<>();",
            member_type_name(member, context)?
        ),
        FieldType::Enum(path) => {
            let enu = project
                .enum_def(path)
                .ok_or_else(|| apiforge_schema::SchemaError::unknown_enum(path))?;
            let first = enu.first().ok_or_else(|| {
                CodegenError::generation(format!("enum '{path}' has no items"))
            })?;
            format!("public {} {name} = {}.{};", path.name, path.name, first.name)
        }
    };
    Ok(line)
}

/// Generates the Java declaration line(s) of a field: an optional
/// `@SerializedName` annotation followed by the declaration.
pub fn field_lines(
    project: &Project,
    field: &Field,
    context: &ElementPath,
) -> Result<Vec<String>, CodegenError> {
    let mut lines = Vec::with_capacity(2);
    if let Some(wire_name) = &field.wire_name {
        lines.push(format!("@SerializedName(\"{wire_name}\")"));
    }
    let declaration = if let Some(value) = &field.fixed {
        fixed_field_line(field, value, context)?
    } else if field.optional {
        optional_field_line(field, context)?
    } else {
        default_field_line(project, field, context)?
    };
    lines.push(declaration);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_schema::{EnumDef, Module};

    fn context() -> ElementPath {
        ElementPath::new("api", "Test")
    }

    fn project_with_enum() -> Project {
        Project::new("Demo", "1.0.0", "com.example")
            .module(Module::new("api").enum_def(EnumDef::new("Color").item("Red", 1)))
    }

    #[test]
    fn test_java_type_name_scalars() {
        assert_eq!(java_type_name(&FieldType::Id, &context()).unwrap(), "Long");
        assert_eq!(
            java_type_name(&FieldType::DateTime, &context()).unwrap(),
            "String"
        );
        assert_eq!(
            java_type_name(&FieldType::StringMap, &context()).unwrap(),
            "HashMap<String, String>"
        );
    }

    #[test]
    fn test_nested_list_is_rejected() {
        let nested = FieldType::list_of(FieldType::list_of(FieldType::Str));
        let err = java_type_name(&nested, &context()).unwrap_err();
        assert!(matches!(err, CodegenError::Generation { .. }));
    }

    #[test]
    fn test_fixed_field_line() {
        let project = project_with_enum();
        let field = Field::new("kind", FieldType::Long).fixed(FixedValue::Int(7));
        let lines = field_lines(&project, &field, &context()).unwrap();
        assert_eq!(lines, ["public final long kind = 7L;"]);
    }

    #[test]
    fn test_fixed_value_on_map_is_rejected() {
        let project = project_with_enum();
        let field =
            Field::new("meta", FieldType::StringMap).fixed(FixedValue::Text("x".to_string()));
        let err = field_lines(&project, &field, &context()).unwrap_err();
        assert!(matches!(err, CodegenError::Generation { .. }));
    }

    #[test]
    fn test_optional_field_line() {
        let project = project_with_enum();
        let field = Field::new("age", FieldType::Integer).optional();
        let lines = field_lines(&project, &field, &context()).unwrap();
        assert_eq!(lines, ["public Integer age = null;"]);
    }

    #[test]
    fn test_default_field_lines() {
        let project = project_with_enum();

        let list = Field::new("tags", FieldType::list_of(FieldType::Str));
        assert_eq!(
            field_lines(&project, &list, &context()).unwrap(),
            ["public List<String> tags = new LinkedList<>();"]
        );

        let enu = Field::new("color", FieldType::Enum(ElementPath::new("api", "Color")));
        assert_eq!(
            field_lines(&project, &enu, &context()).unwrap(),
            ["public Color color = Color.Red;"]
        );
    }

    #[test]
    fn test_wire_name_adds_annotation() {
        let project = project_with_enum();
        let field = Field::new("token", FieldType::Str).wire_name("access_token");
        let lines = field_lines(&project, &field, &context()).unwrap();
        assert_eq!(
            lines,
            [
                "@SerializedName(\"access_token\")",
                "public String token = \"\";"
            ]
        );
    }

    #[test]
    fn test_unknown_enum_reference_fails() {
        let project = project_with_enum();
        let field = Field::new("shape", FieldType::Enum(ElementPath::new("api", "Shape")));
        let err = field_lines(&project, &field, &context()).unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }
}
