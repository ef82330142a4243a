//! Serde serialization and deserialization for Value.
//!
//! Floats serialize through `serialize_f64` (JSON renders non-finite
//! values as null), bytes as a base64 string. Deserialization accepts any
//! self-describing input via a visitor.

use std::fmt;

use base64::Engine;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collections::{SMap, Slice};
use crate::core::value::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),

            Value::Boolean(b) => serializer.serialize_bool(*b),

            Value::Integer(i) => serializer.serialize_i64(*i),

            Value::Float(f) => serializer.serialize_f64(*f),

            Value::Text(t) => serializer.serialize_str(t),

            Value::Bytes(b) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(b);
                serializer.serialize_str(&encoded)
            }

            Value::Slice(s) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(s.len()))?;
                for item in s.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }

            Value::SMap(m) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(m.len()))?;
                for (key, value) in m.entries() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Boolean(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v <= i64::MAX as u64 {
            Ok(Value::Integer(v as i64))
        } else {
            // above i64::MAX, widen to float
            Ok(Value::Float(v as f64))
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(v))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();

        while let Some(elem) = seq.next_element::<Value>()? {
            items.push(elem);
        }

        Ok(Value::Slice(Slice::from_vec(items)))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();

        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.push((key, value));
        }

        Ok(Value::SMap(entries.into_iter().collect::<SMap>()))
    }
}
