//! Swift type tables and field line generation.

use apiforge_schema::{ElementPath, Field, FieldType, FixedValue, Project};

use crate::error::CodegenError;

/// Maps a field type to the Swift type name used in generic argument and
/// optional positions.
///
/// A list names its member type here; nested lists are rejected.
///
/// # Errors
/// Returns `CodegenError::Generation` for a list of lists.
pub fn swift_type_name(ty: &FieldType, context: &ElementPath) -> Result<String, CodegenError> {
    Ok(match ty {
        FieldType::Boolean => "Bool".to_string(),
        FieldType::Integer => "Int".to_string(),
        FieldType::Long | FieldType::Id => "Int64".to_string(),
        FieldType::Double => "Double".to_string(),
        FieldType::Str | FieldType::Url | FieldType::DateTime => "String".to_string(),
        FieldType::StringMap => "[String: String]".to_string(),
        FieldType::Enum(path) | FieldType::Object(path) => path.name.clone(),
        FieldType::Unresolved(name) => name.clone(),
        FieldType::List(member) => member_type_name(member, context)?,
    })
}

/// Maps a list member type to its Swift name.
///
/// # Errors
/// Returns `CodegenError::Generation` for a list of lists.
pub fn member_type_name(member: &FieldType, context: &ElementPath) -> Result<String, CodegenError> {
    if matches!(member, FieldType::List(_)) {
        return Err(CodegenError::generation(format!(
            "list can not contain list in '{context}'"
        )));
    }
    swift_type_name(member, context)
}

/// Generates the Swift declaration line of a field pinned to a fixed value.
fn fixed_field_line(
    field: &Field,
    value: &FixedValue,
    context: &ElementPath,
) -> Result<String, CodegenError> {
    let name = &field.name;
    let line = match (&field.ty, value) {
        (FieldType::Boolean, FixedValue::Bool(v)) => format!("public var {name}: Bool = {v}"),
        (FieldType::Integer, FixedValue::Int(v)) => format!("public var {name}: Int = {v}"),
        (FieldType::Long | FieldType::Id, FixedValue::Int(v)) => {
            format!("public var {name}: Int64 = {v}")
        }
        (FieldType::Double, FixedValue::Float(v)) => {
            format!("public var {name}: Double = {v}")
        }
        (FieldType::Str | FieldType::Url | FieldType::DateTime, FixedValue::Text(v)) => {
            format!("public var {name}: String = \"{v}\"")
        }
        _ => {
            return Err(CodegenError::generation(format!(
                "field '{name}' in '{context}' can not have a fixed value of this type"
            )));
        }
    };
    Ok(line)
}

/// Generates the Swift declaration line of an optional field.
fn optional_field_line(field: &Field, context: &ElementPath) -> Result<String, CodegenError> {
    let name = &field.name;
    let line = match &field.ty {
        FieldType::List(member) => format!(
            "public var {name}: [{}]? = nil",
            member_type_name(member, context)?
        ),
        ty => format!(
            "public var {name}: {}? = nil",
            swift_type_name(ty, context)?
        ),
    };
    Ok(line)
}

/// Generates the Swift declaration line of a required field with its
/// default value.
fn default_field_line(
    project: &Project,
    field: &Field,
    context: &ElementPath,
) -> Result<String, CodegenError> {
    let name = &field.name;
    let line = match &field.ty {
        FieldType::Boolean => format!("public var {name}: Bool = false"),
        FieldType::Integer => format!("public var {name}: Int = 0"),
        FieldType::Long | FieldType::Id => format!("public var {name}: Int64 = 0"),
        FieldType::Double => format!("public var {name}: Double = 0"),
        FieldType::Str | FieldType::Url | FieldType::DateTime => {
            format!("public var {name}: String = \"\"")
        }
        FieldType::StringMap => format!("public var {name}: [String: String] = [:]"),
        FieldType::Object(path) => {
            format!("public var {name}: {} = {}()", path.name, path.name)
        }
        FieldType::List(member) => {
            let member_name = member_type_name(member, context)?;
            format!("public var {name}: [{member_name}] = [{member_name}]()")
        }
        FieldType::Enum(path) => {
            let enu = project
                .enum_def(path)
                .ok_or_else(|| apiforge_schema::SchemaError::unknown_enum(path))?;
            let first = enu.first().ok_or_else(|| {
                CodegenError::generation(format!("enum '{path}' has no items"))
            })?;
            format!("public var {name}: {} = {}.{}", path.name, path.name, first.name)
        }
        FieldType::Unresolved(_) => {
            return Err(CodegenError::generation(format!(
                "field '{name}' in '{context}' can not be an unresolved generic"
            )));
        }
    };
    Ok(line)
}

/// Generates the Swift declaration line of a field.
pub fn field_line(
    project: &Project,
    field: &Field,
    context: &ElementPath,
) -> Result<String, CodegenError> {
    if let Some(value) = &field.fixed {
        fixed_field_line(field, value, context)
    } else if field.optional {
        optional_field_line(field, context)
    } else {
        default_field_line(project, field, context)
    }
}
