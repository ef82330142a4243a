//! Conversion between `Value` and `serde_json::Value`.
//!
//! This is the constructor path of the model: anything that has already
//! been decoded into a `serde_json::Value` tree converts *totally* into a
//! [`Value`] — every array becomes a [`Slice`], every object an [`SMap`],
//! and no input shape can fail. The reverse direction is total as well
//! (non-finite floats become JSON null, bytes render as base64 text).

use tracing::trace;

use crate::collections::{SMap, Slice};
use crate::core::value::Value;

impl From<serde_json::Value> for Value {
    fn from(j: serde_json::Value) -> Self {
        match j {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    // above i64::MAX, widen to float
                    Value::Float(u as f64)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(arr) => {
                let items: Vec<Value> = arr.into_iter().map(Value::from).collect();
                Value::Slice(Slice::from_vec(items))
            }
            serde_json::Value::Object(map) => {
                let entries = map.into_iter().map(|(k, v)| (k, Value::from(v)));
                Value::SMap(entries.collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(j: &serde_json::Value) -> Self {
        Value::from(j.clone())
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        use base64::Engine;

        match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Integer(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(t) => serde_json::Value::String(t),
            Value::Bytes(b) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(b);
                serde_json::Value::String(encoded)
            }
            Value::Slice(s) => {
                let vec: Vec<serde_json::Value> =
                    s.iter().map(|v| serde_json::Value::from(v.clone())).collect();
                serde_json::Value::Array(vec)
            }
            Value::SMap(m) => {
                let map: serde_json::Map<String, serde_json::Value> = m
                    .entries()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v.clone())))
                    .collect();
                serde_json::Value::Object(map)
            }
        }
    }
}

/// Extension trait for `&Value` providing conversion to `serde_json::Value`.
pub trait ValueRefExt {
    /// Convert a reference to Value into `serde_json::Value`.
    fn to_json(&self) -> serde_json::Value;
}

impl ValueRefExt for Value {
    fn to_json(&self) -> serde_json::Value {
        trace!(kind = %self.kind(), "converting value to json");
        serde_json::Value::from(self.clone())
    }
}

/// Extension trait for `&serde_json::Value` providing conversion into the
/// value model.
pub trait JsonValueExt {
    /// Convert into a [`Value`]. Total: succeeds for any JSON tree.
    fn to_value(&self) -> Value;

    /// Convert into a [`Slice`], when the JSON value is an array.
    fn to_slice(&self) -> Option<Slice>;

    /// Convert into an [`SMap`], when the JSON value is an object.
    fn to_smap(&self) -> Option<SMap>;
}

impl JsonValueExt for serde_json::Value {
    fn to_value(&self) -> Value {
        trace!("converting json to value");
        Value::from(self.clone())
    }

    fn to_slice(&self) -> Option<Slice> {
        match Value::from(self.clone()) {
            Value::Slice(s) => Some(s),
            _ => None,
        }
    }

    fn to_smap(&self) -> Option<SMap> {
        match Value::from(self.clone()) {
            Value::SMap(m) => Some(m),
            _ => None,
        }
    }
}
