//! String-keyed heterogeneous container with typed accessors.
//!
//! `SMap` mirrors [`Slice`](super::Slice) with keys instead of indices:
//! the absence error becomes `KeyNotFound`, the accessor pairs are
//! otherwise identical. Backed by a persistent map (`im::HashMap`).

use std::fmt;

use im::HashMap;

use crate::core::value::Value;
use crate::error::{ValueError, ValueResult};

use super::Slice;

/// String-keyed heterogeneous value container.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SMap {
    inner: HashMap<String, Value>,
}

impl SMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Get the number of keys
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

    /// Check if key exists
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Get all keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    /// Get all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }

    /// Get all entries
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }

    /// Insert key-value pair (returns new SMap, original unchanged)
    #[must_use = "immutable methods return a new instance"]
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut new_map = self.inner.clone();
        new_map.insert(key.into(), value.into());
        Self { inner: new_map }
    }

    /// Remove key (returns new SMap and removed value)
    #[must_use = "immutable methods return a new instance"]
    pub fn remove(&self, key: &str) -> Option<(Self, Value)> {
        let mut new_map = self.inner.clone();
        new_map.remove(key).map(|val| (Self { inner: new_map }, val))
    }

    /// Merge with another map (right wins on conflicts)
    #[must_use = "immutable methods return a new instance"]
    pub fn merge(&self, other: &SMap) -> Self {
        let mut new_map = self.inner.clone();
        for (k, v) in other.inner.iter() {
            new_map.insert(k.clone(), v.clone());
        }
        Self { inner: new_map }
    }

    // ==================== Accessor layer ====================

    /// Get value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Get value by key or error.
    ///
    /// This is the raw escape hatch every typed accessor is built on.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::KeyNotFound` for an absent key
    pub fn try_get(&self, key: &str) -> ValueResult<&Value> {
        self.get(key).ok_or_else(|| ValueError::key_not_found(key))
    }

    /// Best-effort boolean: truthiness of the value at `key`.
    ///
    /// Never fails on type — every present value coerces.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::KeyNotFound` for an absent key
    pub fn bool(&self, key: &str) -> ValueResult<bool> {
        Ok(self.try_get(key)?.to_boolean())
    }

    /// True only when the value at `key` is a stored boolean.
    #[must_use]
    pub fn is_bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Boolean(_)))
    }

    /// Best-effort integer coercion of the value at `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` when absent, `TypeMismatch` when present but not
    /// coercible.
    pub fn int(&self, key: &str) -> ValueResult<i64> {
        self.try_get(key)?.to_integer()
    }

    /// True only when the value at `key` is a stored integer.
    #[must_use]
    pub fn is_int(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Integer(_)))
    }

    /// Best-effort float coercion of the value at `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` when absent, `TypeMismatch` when present but not
    /// coercible.
    pub fn float(&self, key: &str) -> ValueResult<f64> {
        self.try_get(key)?.to_float()
    }

    /// True only when the value at `key` is a stored float.
    #[must_use]
    pub fn is_float(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Float(_)))
    }

    /// Best-effort string coercion of the value at `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` when absent, `TypeMismatch` when present but not
    /// coercible.
    pub fn text(&self, key: &str) -> ValueResult<String> {
        self.try_get(key)?.to_text()
    }

    /// True only when the value at `key` is stored text.
    #[must_use]
    pub fn is_text(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Text(_)))
    }

    /// Convert the value at `key` to a nested Slice.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` when absent, `TypeMismatch` when present but not
    /// slice-shaped.
    pub fn slice(&self, key: &str) -> ValueResult<Slice> {
        self.try_get(key)?.to_slice()
    }

    /// True only when the value at `key` is slice-shaped.
    #[must_use]
    pub fn is_slice(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_slice)
    }

    /// Convert the value at `key` to a nested SMap.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` when absent, `TypeMismatch` when present but not
    /// map-shaped.
    pub fn smap(&self, key: &str) -> ValueResult<SMap> {
        self.try_get(key)?.to_smap()
    }

    /// True only when the value at `key` is map-shaped.
    #[must_use]
    pub fn is_smap(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_smap)
    }
}

impl FromIterator<(String, Value)> for SMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<Value> for SMap {
    type Error = ValueError;

    fn try_from(value: Value) -> ValueResult<Self> {
        value.to_smap()
    }
}

impl<'a> IntoIterator for &'a SMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = im::hashmap::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl fmt::Display for SMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.entries() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SMap {
        let nested: SMap = [("c".to_string(), Value::integer(1))].into_iter().collect();
        [
            ("a".to_string(), Value::integer(0)),
            ("b".to_string(), Value::from(nested)),
            ("t".to_string(), Value::boolean(true)),
            ("s".to_string(), Value::text("hello")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_absent_key_is_absence() {
        let m = sample();
        for err in [
            m.try_get("z").unwrap_err(),
            m.bool("z").unwrap_err(),
            m.int("z").unwrap_err(),
            m.float("z").unwrap_err(),
            m.text("z").unwrap_err(),
            m.slice("z").unwrap_err(),
            m.smap("z").unwrap_err(),
        ] {
            assert!(err.is_absent(), "expected absence, got {err}");
            assert!(!err.is_type_mismatch());
        }
    }

    #[test]
    fn test_bool_is_truthiness() {
        let m = sample();
        assert!(!m.bool("a").unwrap()); // 0 is falsy
        assert!(m.bool("b").unwrap()); // non-empty nested map
        assert!(m.bool("t").unwrap());
        assert!(m.bool("s").unwrap());
    }

    #[test]
    fn test_wrong_type_is_mismatch_not_absence() {
        let m = sample();
        let err = m.slice("a").unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(!err.is_absent());
    }

    #[test]
    fn test_nested_smap_conversion() {
        let m = sample();
        assert!(m.is_smap("b"));
        let nested = m.smap("b").unwrap();
        assert_eq!(nested.int("c").unwrap(), 1);
    }

    #[test]
    fn test_predicate_coercion_coherence() {
        let m = sample();
        for key in ["a", "b", "t", "s"] {
            assert_eq!(m.is_slice(key), m.slice(key).is_ok());
            assert_eq!(m.is_smap(key), m.smap(key).is_ok());
        }
    }

    #[test]
    fn test_insert_original_unchanged() {
        let m = sample();
        let len = m.len();
        let bigger = m.insert("new", Value::integer(9));
        assert_eq!(m.len(), len);
        assert!(!m.contains_key("new"));
        assert_eq!(bigger.int("new").unwrap(), 9);
    }

    #[test]
    fn test_remove_and_merge() {
        let m = sample();
        let (smaller, removed) = m.remove("a").unwrap();
        assert_eq!(removed, Value::integer(0));
        assert!(!smaller.contains_key("a"));
        assert!(m.contains_key("a"));

        // right wins on conflicts
        let other = SMap::new().insert("t", Value::boolean(false));
        let merged = m.merge(&other);
        assert_eq!(merged.try_get("t").unwrap(), &Value::boolean(false));
    }

    #[test]
    fn test_try_from_value() {
        let v = Value::from(sample());
        let m = SMap::try_from(v).unwrap();
        assert_eq!(m.len(), 4);

        let err = SMap::try_from(Value::text("nope")).unwrap_err();
        assert!(err.is_type_mismatch());
    }
}
