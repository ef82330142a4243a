//! Ordered heterogeneous container with typed accessors.
//!
//! `Slice` wraps a persistent vector (`im::Vector`) so that nested-slice
//! accessors can hand back owned values through structural sharing, and so
//! owner-side mutation (`push`, `set`) never disturbs existing readers.
//!
//! Every supported kind gets a two-tier accessor pair: a best-effort
//! coercion that reports failure through [`ValueError`], and a strict
//! predicate that never fails (out of range folds to `false`).

use std::fmt;

use im::Vector;

use crate::core::value::Value;
use crate::error::{ValueError, ValueResult};

use super::SMap;

/// Ordered, index-addressed heterogeneous value container.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Slice {
    inner: Vector<Value>,
}

impl Slice {
    /// Create an empty slice
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Vector::new(),
        }
    }

    /// Create from a Vec
    #[must_use]
    pub fn from_vec(vec: Vec<Value>) -> Self {
        Self {
            inner: Vector::from(vec),
        }
    }

    /// Get the length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Check whether an index is in range
    #[inline]
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> im::vector::Iter<'_, Value> {
        self.inner.iter()
    }

    /// Get first element
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.inner.front()
    }

    /// Get last element
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.inner.back()
    }

    /// Push an element (returns new Slice, original unchanged)
    #[must_use = "immutable methods return a new instance"]
    pub fn push(&self, value: impl Into<Value>) -> Self {
        let mut new_vec = self.inner.clone();
        new_vec.push_back(value.into());
        Self { inner: new_vec }
    }

    /// Set element at index (returns new Slice)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::IndexOutOfBounds` if `index >= len()`
    pub fn set(&self, index: usize, value: impl Into<Value>) -> ValueResult<Self> {
        if index >= self.len() {
            return Err(ValueError::index_out_of_bounds(index, self.len()));
        }

        let mut new_vec = self.inner.clone();
        new_vec.set(index, value.into());
        Ok(Self { inner: new_vec })
    }

    // ==================== Accessor layer ====================

    /// Get element at index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.inner.get(index)
    }

    /// Get element at index or error.
    ///
    /// This is the raw escape hatch every typed accessor is built on.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::IndexOutOfBounds` if `index >= len()`
    pub fn try_get(&self, index: usize) -> ValueResult<&Value> {
        self.get(index)
            .ok_or_else(|| ValueError::index_out_of_bounds(index, self.len()))
    }

    /// Best-effort boolean: truthiness of the element at `index`.
    ///
    /// Never fails on type — every present value coerces.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::IndexOutOfBounds` if `index >= len()`
    pub fn bool(&self, index: usize) -> ValueResult<bool> {
        Ok(self.try_get(index)?.to_boolean())
    }

    /// True only when the element at `index` is a stored boolean.
    #[must_use]
    pub fn is_bool(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Value::Boolean(_)))
    }

    /// Best-effort integer coercion of the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` when absent, `TypeMismatch` when present but not
    /// coercible.
    pub fn int(&self, index: usize) -> ValueResult<i64> {
        self.try_get(index)?.to_integer()
    }

    /// True only when the element at `index` is a stored integer.
    #[must_use]
    pub fn is_int(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Value::Integer(_)))
    }

    /// Best-effort float coercion of the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` when absent, `TypeMismatch` when present but not
    /// coercible.
    pub fn float(&self, index: usize) -> ValueResult<f64> {
        self.try_get(index)?.to_float()
    }

    /// True only when the element at `index` is a stored float.
    #[must_use]
    pub fn is_float(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Value::Float(_)))
    }

    /// Best-effort string coercion of the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` when absent, `TypeMismatch` when present but not
    /// coercible.
    pub fn text(&self, index: usize) -> ValueResult<String> {
        self.try_get(index)?.to_text()
    }

    /// True only when the element at `index` is stored text.
    #[must_use]
    pub fn is_text(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Value::Text(_)))
    }

    /// Convert the element at `index` to a nested Slice.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` when absent, `TypeMismatch` when present but not
    /// slice-shaped.
    pub fn slice(&self, index: usize) -> ValueResult<Slice> {
        self.try_get(index)?.to_slice()
    }

    /// True only when the element at `index` is slice-shaped.
    #[must_use]
    pub fn is_slice(&self, index: usize) -> bool {
        self.get(index).is_some_and(Value::is_slice)
    }

    /// Convert the element at `index` to a nested SMap.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` when absent, `TypeMismatch` when present but not
    /// map-shaped.
    pub fn smap(&self, index: usize) -> ValueResult<SMap> {
        self.try_get(index)?.to_smap()
    }

    /// True only when the element at `index` is map-shaped.
    #[must_use]
    pub fn is_smap(&self, index: usize) -> bool {
        self.get(index).is_some_and(Value::is_smap)
    }
}

impl From<Vec<Value>> for Slice {
    fn from(vec: Vec<Value>) -> Self {
        Self::from_vec(vec)
    }
}

impl FromIterator<Value> for Slice {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<Value> for Slice {
    type Error = ValueError;

    fn try_from(value: Value) -> ValueResult<Self> {
        value.to_slice()
    }
}

impl IntoIterator for Slice {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Slice {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        for item in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
