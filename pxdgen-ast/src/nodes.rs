//! Declaration and type nodes.

use serde::{Deserialize, Serialize};

use crate::{CType, Location};

/// A `typedef` declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Typedef {
    pub identifier: String,
    pub typ: Type,
    #[serde(default)]
    pub location: Option<Location>,
}

/// A `struct` declaration.
///
/// `identifier` is `None` for an anonymous struct, which is only meaningful
/// inside an enclosing typedef. `opaque` marks a forward declaration whose
/// field list is unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Struct {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub opaque: bool,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// A `union` declaration. Same shape as [`Struct`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Union {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub opaque: bool,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// An `enum` declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enum {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub opaque: bool,
    #[serde(default)]
    pub values: Vec<EnumValue>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// A member of a struct or union.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub identifier: String,
    pub typ: Type,
}

/// A single enumerator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumValue {
    pub identifier: String,
}

/// A function declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub identifier: String,
    pub res_type: Type,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// A formal parameter of a function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argument {
    pub identifier: String,
    pub typ: Type,
}

/// A type as it appears in a declaration position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Type {
    /// A primitive C type.
    Prim { name: CType },
    /// A reference to a typedef declared elsewhere. Carries the origin so
    /// cross-header uses can register an import.
    Typedef {
        identifier: String,
        #[serde(default)]
        location: Option<Location>,
    },
    /// A pointer to a pointee type.
    Pointer { typ: Box<Type> },
    /// An array of an element type. `dim` is `None` when unsized.
    Array {
        typ: Box<Type>,
        #[serde(default)]
        dim: Option<u64>,
    },
    /// An inline struct definition, as found in typedef targets.
    Struct(Struct),
    /// An inline union definition.
    Union(Union),
    /// An inline enum definition.
    Enum(Enum),
    /// A construct the front end could not express, such as a function
    /// pointer. Carries the raw source spelling for reporting.
    Unknown { spelling: String },
}

impl Type {
    /// Returns true for the pointer/array modifier layers.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Type::Pointer { .. } | Type::Array { .. })
    }

    /// Short description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Type::Prim { name } => name.c_name().to_string(),
            Type::Typedef { identifier, .. } => format!("typedef {identifier}"),
            Type::Pointer { .. } => "pointer".to_string(),
            Type::Array { .. } => "array".to_string(),
            Type::Struct(st) => {
                format!("struct {}", st.identifier.as_deref().unwrap_or("<anonymous>"))
            }
            Type::Union(un) => {
                format!("union {}", un.identifier.as_deref().unwrap_or("<anonymous>"))
            }
            Type::Enum(en) => {
                format!("enum {}", en.identifier.as_deref().unwrap_or("<anonymous>"))
            }
            Type::Unknown { spelling } => format!("`{spelling}`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_modifier() {
        let int = Type::Prim { name: CType::Int };
        assert!(!int.is_modifier());
        assert!(Type::Pointer { typ: Box::new(int.clone()) }.is_modifier());
        assert!(Type::Array { typ: Box::new(int), dim: Some(4) }.is_modifier());
    }

    #[test]
    fn test_describe() {
        assert_eq!(Type::Prim { name: CType::Int }.describe(), "int");
        assert_eq!(
            Type::Typedef { identifier: "FILE".into(), location: None }.describe(),
            "typedef FILE"
        );
        assert_eq!(
            Type::Unknown { spelling: "void (*)(int)".into() }.describe(),
            "`void (*)(int)`"
        );
    }

    #[test]
    fn test_type_deserializes_from_tagged_json() {
        let typ: Type = serde_json::from_str(
            r#"{"kind": "array", "typ": {"kind": "pointer", "typ": {"kind": "prim", "name": "int"}}, "dim": 4}"#,
        )
        .unwrap();
        match typ {
            Type::Array { typ, dim } => {
                assert_eq!(dim, Some(4));
                assert!(typ.is_modifier());
            }
            other => panic!("expected array, got {other:?}"),
        }
    }
}
