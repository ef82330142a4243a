//! Unified Value enum combining all scalar and collection kinds.
//!
//! This is the central type of the model: every slot of a [`Slice`] or
//! [`SMap`] holds a `Value`, classified structurally into exactly one kind.

use crate::collections::{SMap, Slice};
use crate::core::kind::ValueKind;
use crate::error::{ValueError, ValueResult};

/// A dynamically typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Null/absent value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer number (i64)
    Integer(i64),

    /// Floating point number (f64)
    Float(f64),

    /// UTF-8 text string
    Text(String),

    /// Binary data; participates in truthiness but has no numeric,
    /// string or nested coercion
    Bytes(Vec<u8>),

    /// Nested ordered sequence of values
    Slice(Slice),

    /// Nested string-keyed map of values
    SMap(SMap),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Create a bytes value
    pub fn bytes(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }

    /// Create an empty nested slice
    pub fn slice_empty() -> Self {
        Self::Slice(Slice::new())
    }

    /// Create an empty nested map
    pub fn smap_empty() -> Self {
        Self::SMap(SMap::new())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Slice(_) => ValueKind::Slice,
            Self::SMap(_) => ValueKind::SMap,
        }
    }

    /// Check if this is null
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a boolean
    #[inline]
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if this is an integer
    #[inline]
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Check if this is a float
    #[inline]
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Check if this is numeric (integer or float)
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Check if this is text
    #[inline]
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this is bytes
    #[inline]
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }

    /// Check if this is a nested slice
    #[inline]
    #[must_use]
    pub fn is_slice(&self) -> bool {
        matches!(self, Self::Slice(_))
    }

    /// Check if this is a nested map
    #[inline]
    #[must_use]
    pub fn is_smap(&self) -> bool {
        matches!(self, Self::SMap(_))
    }

    /// Check if this is a collection (slice or map)
    #[inline]
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Slice(_) | Self::SMap(_))
    }

    /// Check whether this is the zero/empty value of its kind.
    ///
    /// Null, `false`, `0`, `0.0`, `""` and empty bytes/slice/map are zero;
    /// everything else is not. NaN compares unequal to zero and is
    /// therefore non-zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Boolean(b) => !b,
            Self::Integer(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
            Self::Text(t) => t.is_empty(),
            Self::Bytes(b) => b.is_empty(),
            Self::Slice(s) => s.is_empty(),
            Self::SMap(m) => m.is_empty(),
        }
    }

    // ==================== Conversions (as_*) ====================

    /// Try to get as boolean
    #[inline]
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Try to get as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// Try to get as nested slice reference
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> Option<&Slice> {
        match self {
            Self::Slice(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as nested map reference
    #[inline]
    #[must_use]
    pub fn as_smap(&self) -> Option<&SMap> {
        match self {
            Self::SMap(m) => Some(m),
            _ => None,
        }
    }

    // ==================== Conversions (to_*) ====================

    /// Convert to boolean via truthiness.
    ///
    /// Total over the value space: every value is either zero (falsy) or
    /// not (truthy), so this never fails.
    #[inline]
    #[must_use]
    pub fn to_boolean(&self) -> bool {
        !self.is_zero()
    }

    /// Try to convert to integer
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` when the value has no integer
    /// interpretation (non-finite float, unparsable text, bytes, null,
    /// collections).
    pub fn to_integer(&self) -> ValueResult<i64> {
        match self {
            Self::Integer(i) => Ok(*i),
            Self::Float(f) => {
                if f.is_finite() {
                    Ok(*f as i64)
                } else {
                    Err(ValueError::type_mismatch(
                        ValueKind::Integer.name(),
                        self.kind().name(),
                    ))
                }
            }
            Self::Boolean(b) => Ok(i64::from(*b)),
            Self::Text(t) => t.parse::<i64>().map_err(|_| {
                ValueError::type_mismatch(ValueKind::Integer.name(), self.kind().name())
            }),
            _ => Err(ValueError::type_mismatch(
                ValueKind::Integer.name(),
                self.kind().name(),
            )),
        }
    }

    /// Try to convert to float
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` when the value has no float
    /// interpretation.
    pub fn to_float(&self) -> ValueResult<f64> {
        match self {
            Self::Float(f) => Ok(*f),
            Self::Integer(i) => Ok(*i as f64),
            Self::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Self::Text(t) => t.parse::<f64>().map_err(|_| {
                ValueError::type_mismatch(ValueKind::Float.name(), self.kind().name())
            }),
            _ => Err(ValueError::type_mismatch(
                ValueKind::Float.name(),
                self.kind().name(),
            )),
        }
    }

    /// Try to convert to an owned string.
    ///
    /// Text converts as itself; booleans and numbers render via `Display`.
    /// Null, bytes and collections do not coerce.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` for non-coercible kinds.
    pub fn to_text(&self) -> ValueResult<String> {
        match self {
            Self::Text(t) => Ok(t.clone()),
            Self::Boolean(b) => Ok(b.to_string()),
            Self::Integer(i) => Ok(i.to_string()),
            Self::Float(_) => Ok(self.to_string()),
            _ => Err(ValueError::type_mismatch(
                ValueKind::Text.name(),
                self.kind().name(),
            )),
        }
    }

    /// Try to convert to a nested slice.
    ///
    /// Cheap for slice-shaped values (structural sharing), an error for
    /// everything else.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` when the value is not slice-shaped.
    pub fn to_slice(&self) -> ValueResult<Slice> {
        match self {
            Self::Slice(s) => Ok(s.clone()),
            _ => Err(ValueError::type_mismatch(
                ValueKind::Slice.name(),
                self.kind().name(),
            )),
        }
    }

    /// Try to convert to a nested map.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` when the value is not map-shaped.
    pub fn to_smap(&self) -> ValueResult<SMap> {
        match self {
            Self::SMap(m) => Ok(m.clone()),
            _ => Err(ValueError::type_mismatch(
                ValueKind::SMap.name(),
                self.kind().name(),
            )),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Slice(a), Self::Slice(b)) => a == b,
            (Self::SMap(a), Self::SMap(b)) => a == b,
            _ => false,
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<Slice> for Value {
    fn from(v: Slice) -> Self {
        Self::Slice(v)
    }
}

impl From<SMap> for Value {
    fn from(v: SMap) -> Self {
        Self::SMap(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Slice(Slice::from_vec(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
