//! Field and enum type definitions.
//!
//! This module contains the data structures describing the value side of the
//! schema: field types, fixed values, fields, and enumerations. Entities and
//! their inheritance relations live in [`crate::entity`].

use serde::{Deserialize, Serialize};

use crate::project::ElementPath;

/// Type expression of a field.
///
/// `Unresolved` is an opaque generic placeholder: a name that a backend
/// forwards verbatim until some entity along the inheritance chain binds it
/// to a concrete type through its specialization map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldType {
    /// Boolean value.
    Boolean,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Numeric identifier (64-bit on every target).
    Id,
    /// Double-precision float.
    Double,
    /// Text string.
    Str,
    /// URL, carried as text.
    Url,
    /// Date-time, carried as text.
    DateTime,
    /// String-to-string map.
    StringMap,
    /// Reference to an enum declared in the project.
    Enum(ElementPath),
    /// Reference to an entity declared in the project.
    Object(ElementPath),
    /// Homogeneous list of a member type.
    List(Box<FieldType>),
    /// Unresolved generic placeholder, treated opaquely by name.
    Unresolved(String),
}

impl FieldType {
    /// Returns true for the scalar types that may carry a fixed value.
    #[must_use]
    pub fn supports_fixed_value(&self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Integer
                | Self::Long
                | Self::Id
                | Self::Double
                | Self::Str
                | Self::Url
                | Self::DateTime
        )
    }

    /// Creates a list type with the given member type.
    #[must_use]
    pub fn list_of(member: FieldType) -> Self {
        Self::List(Box::new(member))
    }
}

/// A constant value pinned to a field in generated code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FixedValue {
    /// Boolean constant.
    Bool(bool),
    /// Integer constant.
    Int(i64),
    /// Floating point constant.
    Float(f64),
    /// Text constant.
    Text(String),
}

/// A field declared locally on an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name as declared in the schema.
    pub name: String,
    /// Field type expression.
    pub ty: FieldType,
    /// True when the field may be absent on the wire.
    pub optional: bool,
    /// Constant value, if the field is pinned.
    pub fixed: Option<FixedValue>,
    /// On-the-wire key, when it differs from the field name.
    pub wire_name: Option<String>,
    /// Documentation comment.
    pub comment: Option<String>,
}

impl Field {
    /// Creates a required field with no fixed value.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            fixed: None,
            wire_name: None,
            comment: None,
        }
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Pins the field to a fixed value.
    #[must_use]
    pub fn fixed(mut self, value: FixedValue) -> Self {
        self.fixed = Some(value);
        self
    }

    /// Sets the on-the-wire key.
    #[must_use]
    pub fn wire_name(mut self, name: impl Into<String>) -> Self {
        self.wire_name = Some(name.into());
        self
    }

    /// Sets the documentation comment.
    #[must_use]
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }
}

/// A single item of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumItem {
    /// Item name.
    pub name: String,
    /// Numeric value.
    pub value: i32,
    /// Documentation comment.
    pub comment: Option<String>,
}

impl EnumItem {
    /// Creates an enum item.
    #[must_use]
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            comment: None,
        }
    }
}

/// An enumeration declared in a module.
///
/// Item order is declaration order and is preserved in generated output;
/// the first item doubles as the default value on targets that need one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Ordered items.
    pub items: Vec<EnumItem>,
    /// Documentation comment.
    pub comment: Option<String>,
}

impl EnumDef {
    /// Creates an empty enumeration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            comment: None,
        }
    }

    /// Adds an item.
    #[must_use]
    pub fn item(mut self, name: impl Into<String>, value: i32) -> Self {
        self.items.push(EnumItem::new(name, value));
        self
    }

    /// Returns the first item, the default on targets that need one.
    #[must_use]
    pub fn first(&self) -> Option<&EnumItem> {
        self.items.first()
    }
}

/// HTTP method of a request entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// HEAD request.
    Head,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
    /// CONNECT request.
    Connect,
    /// OPTIONS request.
    Options,
}

impl HttpMethod {
    /// Returns the upper-case wire name of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Connect => "CONNECT",
            Self::Options => "OPTIONS",
        }
    }
}
