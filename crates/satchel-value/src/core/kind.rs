//! Value kinds.
//!
//! `ValueKind` is the lightweight, closed classification of a [`Value`]:
//! every stored value belongs to exactly one kind, computed once via
//! [`Value::kind`], so downstream code can match exhaustively instead of
//! repeating ad-hoc shape tests.
//!
//! ```rust
//! use satchel_value::{Value, ValueKind};
//!
//! let v = Value::from(3.14);
//! assert_eq!(v.kind(), ValueKind::Float);
//! assert!(ValueKind::Float.is_numeric());
//! ```

use core::fmt::{Display, Formatter};

use crate::core::value::Value;

/// Represents the kind/type of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Bytes,
    Slice,
    SMap,
}

impl ValueKind {
    /// Get all available kinds
    pub fn all() -> Vec<Self> {
        vec![
            Self::Null,
            Self::Boolean,
            Self::Integer,
            Self::Float,
            Self::Text,
            Self::Bytes,
            Self::Slice,
            Self::SMap,
        ]
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Slice | Self::SMap)
    }

    /// Check if this kind is a scalar (not a collection)
    pub const fn is_scalar(&self) -> bool {
        !self.is_collection()
    }

    /// Get the kind of a Value
    pub fn from_value(value: &Value) -> Self {
        value.kind()
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Slice => "slice",
            Self::SMap => "smap",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
