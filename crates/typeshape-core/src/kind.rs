//! Canonical type kind definitions.
//!
//! The kind set is closed: every descriptor in a [`TypeGraph`](crate::TypeGraph)
//! carries exactly one of these, and consumers match on it exhaustively.

use serde::{Deserialize, Serialize};

/// Kind of a type descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    /// Integer wide enough to hold a pointer.
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    /// Untyped raw pointer.
    UnsafePointer,
    /// Fixed-length array `[N]T`.
    Array,
    /// Channel `chan T`.
    Chan,
    /// Function value.
    Func,
    /// Method-set contract.
    Interface,
    /// Dictionary `map[K]V`.
    Map,
    /// Nilable reference `*T`.
    Pointer,
    /// Growable sequence `[]T`.
    Slice,
    /// Record with ordered fields.
    Struct,
}

impl TypeKind {
    /// All kinds, in declaration order.
    pub const ALL: [TypeKind; 26] = [
        Self::Bool,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uintptr,
        Self::Float32,
        Self::Float64,
        Self::Complex64,
        Self::Complex128,
        Self::String,
        Self::UnsafePointer,
        Self::Array,
        Self::Chan,
        Self::Func,
        Self::Interface,
        Self::Map,
        Self::Pointer,
        Self::Slice,
        Self::Struct,
    ];

    /// Whether this is a language primitive (scalar) kind.
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Uintptr
                | Self::Float32
                | Self::Float64
                | Self::Complex64
                | Self::Complex128
                | Self::String
                | Self::UnsafePointer
        )
    }

    /// Whether this kind is a plain integer or floating point number.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Float32
                | Self::Float64
        )
    }

    /// Whether descriptors of this kind carry an element type.
    pub fn has_elem(self) -> bool {
        matches!(
            self,
            Self::Array | Self::Chan | Self::Map | Self::Pointer | Self::Slice
        )
    }

    /// Whether descriptors of this kind carry a key type.
    pub fn has_key(self) -> bool {
        matches!(self, Self::Map)
    }

    /// Name of the predeclared type for primitive kinds.
    pub fn predeclared_name(self) -> Option<&'static str> {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::UnsafePointer => "Pointer",
            _ => return None,
        };
        Some(name)
    }
}
