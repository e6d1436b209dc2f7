//! Primitive C type descriptors.

use serde::{Deserialize, Serialize};

/// The closed set of primitive C types.
///
/// Each descriptor carries its canonical declaration spelling; the front
/// end maps clang builtin types onto these tags, and the renderer never
/// spells a primitive any other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CType {
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "char")]
    Char,
    #[serde(rename = "signed char")]
    SChar,
    #[serde(rename = "unsigned char")]
    UChar,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "unsigned short")]
    UShort,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "unsigned int")]
    UInt,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "unsigned long")]
    ULong,
    #[serde(rename = "long long")]
    LongLong,
    #[serde(rename = "unsigned long long")]
    ULongLong,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "long double")]
    LongDouble,
}

impl CType {
    /// Canonical declaration spelling. `_Bool` is spelled `bint`, the
    /// Cython name for a C boolean.
    pub fn c_name(&self) -> &'static str {
        match self {
            CType::Void => "void",
            CType::Bool => "bint",
            CType::Char => "char",
            CType::SChar => "signed char",
            CType::UChar => "unsigned char",
            CType::Short => "short",
            CType::UShort => "unsigned short",
            CType::Int => "int",
            CType::UInt => "unsigned int",
            CType::Long => "long",
            CType::ULong => "unsigned long",
            CType::LongLong => "long long",
            CType::ULongLong => "unsigned long long",
            CType::Float => "float",
            CType::Double => "double",
            CType::LongDouble => "long double",
        }
    }

    /// Returns true for `void`.
    pub fn is_void(&self) -> bool {
        matches!(self, CType::Void)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_name_spellings() {
        assert_eq!(CType::Void.c_name(), "void");
        assert_eq!(CType::UInt.c_name(), "unsigned int");
        assert_eq!(CType::LongLong.c_name(), "long long");
        assert_eq!(CType::Bool.c_name(), "bint");
    }

    #[test]
    fn test_is_void() {
        assert!(CType::Void.is_void());
        assert!(!CType::Int.is_void());
    }

    #[test]
    fn test_serde_names_match_c_spellings() {
        let ty: CType = serde_json::from_str("\"unsigned long long\"").unwrap();
        assert_eq!(ty, CType::ULongLong);
        assert_eq!(serde_json::to_string(&CType::Void).unwrap(), "\"void\"");
    }
}
