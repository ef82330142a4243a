//! Display implementations for Value.
//!
//! Scalars render plainly, bytes as base64, collections in bracketed form.
//! This is also the rendering used by `satchel-text` when substituting
//! values into templates.

use std::fmt;

use base64::Engine;

use crate::core::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),

            Value::Boolean(b) => write!(f, "{b}"),

            Value::Integer(i) => write!(f, "{i}"),

            Value::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() {
                    if fl.is_sign_positive() {
                        write!(f, "+Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else {
                    write!(f, "{fl}")
                }
            }

            Value::Text(t) => write!(f, "{t}"),

            Value::Bytes(b) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(b);
                write!(f, "Bytes({encoded})")
            }

            Value::Slice(s) => write!(f, "{s}"),

            Value::SMap(m) => write!(f, "{m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{SMap, Slice};

    #[test]
    fn test_display_null() {
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_display_boolean() {
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::integer(42).to_string(), "42");
        assert_eq!(Value::float(3.5).to_string(), "3.5");
    }

    #[test]
    fn test_display_nonfinite_floats() {
        assert_eq!(Value::float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::float(f64::INFINITY).to_string(), "+Infinity");
        assert_eq!(Value::float(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Value::text("hello world").to_string(), "hello world");
    }

    #[test]
    fn test_display_bytes() {
        let display = Value::bytes(vec![1, 2, 3]).to_string();
        assert!(display.starts_with("Bytes("));
        assert!(display.contains("AQID")); // Base64 of [1, 2, 3]
    }

    #[test]
    fn test_display_slice() {
        let s = Slice::from_vec(vec![Value::integer(1), Value::text("x")]);
        assert_eq!(Value::from(s).to_string(), "[1, x]");
    }

    #[test]
    fn test_display_smap() {
        let m: SMap = [("a".to_string(), Value::integer(1))].into_iter().collect();
        assert_eq!(Value::from(m).to_string(), "{a: 1}");
    }
}
