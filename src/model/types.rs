//! Primitive property types.

use std::fmt;

use serde::Serialize;

/// Fixed-width primitive types a property can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Bool,
}

impl PrimitiveType {
    /// Look up a primitive by its declaration name (case-insensitive).
    ///
    /// `byte` is accepted as an alias of `uint8`.
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name.to_ascii_lowercase().as_str() {
            "char" => Self::Char,
            "int8" => Self::Int8,
            "int16" => Self::Int16,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "uint8" | "byte" => Self::Uint8,
            "uint16" => Self::Uint16,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "bool" => Self::Bool,
            _ => return None,
        };
        Some(ty)
    }

    /// Declaration name as written in documents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Bool => "bool",
        }
    }

    /// Fixed-width C type name used by code emitters.
    pub fn c_name(&self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Int8 => "int8_t",
            Self::Int16 => "int16_t",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::Uint8 => "uint8_t",
            Self::Uint16 => "uint16_t",
            Self::Uint32 => "uint32_t",
            Self::Uint64 => "uint64_t",
            Self::Bool => "bool",
        }
    }
}

/// A primitive type with its cardinality.
///
/// A cardinality above 1 denotes a fixed-size array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDeclaration {
    #[serde(rename = "type")]
    pub ty: PrimitiveType,
    pub cardinality: u32,
}

impl TypeDeclaration {
    pub fn new(ty: PrimitiveType, cardinality: u32) -> Self {
        Self { ty, cardinality }
    }

    /// A single (non-array) value of `ty`.
    pub fn scalar(ty: PrimitiveType) -> Self {
        Self::new(ty, 1)
    }

    pub fn is_array(&self) -> bool {
        self.cardinality > 1
    }
}

impl fmt::Display for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_array() {
            write!(f, "{} [{}]", self.ty.c_name(), self.cardinality)
        } else {
            f.write_str(self.ty.c_name())
        }
    }
}
