//! Key/value template formatting.
//!
//! Placeholders named after map keys are replaced with the display form of
//! the keyed value, Python `str.format`-style. The delimiter pair travels
//! in an explicit [`Delimiters`] value, so every call is referentially
//! transparent and concurrent callers cannot observe each other's
//! configuration.

use satchel_value::SMap;

use crate::error::{TextError, TextResult};

/// The placeholder delimiter pair used by [`kv_format_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    left: String,
    right: String,
}

impl Default for Delimiters {
    /// The default pair is `{` and `}`.
    fn default() -> Self {
        Self {
            left: "{".to_string(),
            right: "}".to_string(),
        }
    }
}

impl Delimiters {
    /// Create a delimiter pair.
    ///
    /// # Errors
    ///
    /// Returns `TextError::EmptyDelimiter` when either side is empty.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> TextResult<Self> {
        let left = left.into();
        let right = right.into();
        if left.is_empty() || right.is_empty() {
            return Err(TextError::EmptyDelimiter);
        }
        Ok(Self { left, right })
    }

    /// The left delimiter
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The right delimiter
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }

    fn wrap(&self, key: &str) -> String {
        format!("{}{}{}", self.left, key, self.right)
    }
}

/// Format `template` with the default `{`/`}` delimiters.
///
/// Every `{key}` occurrence is replaced with the display form of the value
/// stored under `key`; placeholders naming no key are left verbatim.
#[must_use]
pub fn kv_format(template: &str, values: &SMap) -> String {
    kv_format_with(template, values, &Delimiters::default())
}

/// Format `template`, replacing delimited placeholders with the display
/// form of the matching keyed value.
#[must_use]
pub fn kv_format_with(template: &str, values: &SMap, delimiters: &Delimiters) -> String {
    let mut out = template.to_string();
    for (key, value) in values.entries() {
        let placeholder = delimiters.wrap(key);
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, &value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use satchel_value::Value;

    fn args() -> SMap {
        [
            ("key1".to_string(), Value::text("abc")),
            ("key2".to_string(), Value::integer(123)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_kv_format() {
        let tpl = "{key1}, {key2}, {key1}, {key2}";
        assert_eq!(kv_format(tpl, &args()), "abc, 123, abc, 123");
    }

    #[test]
    fn test_kv_format_with_custom_delimiters() {
        let delims = Delimiters::new("{{", "}}").unwrap();
        let tpl = "{{key1}}, {{key2}}, {{key1}}, {{key2}}";
        assert_eq!(
            kv_format_with(tpl, &args(), &delims),
            "abc, 123, abc, 123"
        );
    }

    #[test]
    fn test_unknown_placeholders_left_verbatim() {
        assert_eq!(kv_format("{key1} and {nope}", &args()), "abc and {nope}");
    }

    #[test]
    fn test_values_render_via_display() {
        let values: SMap = [
            ("b".to_string(), Value::boolean(true)),
            ("f".to_string(), Value::float(2.5)),
            ("n".to_string(), Value::Null),
        ]
        .into_iter()
        .collect();
        assert_eq!(kv_format("{b}/{f}/{n}", &values), "true/2.5/null");
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        assert_eq!(Delimiters::new("", "}"), Err(TextError::EmptyDelimiter));
        assert_eq!(Delimiters::new("{", ""), Err(TextError::EmptyDelimiter));
    }

    #[test]
    fn test_independent_configurations() {
        // two configurations in flight never interfere
        let a = Delimiters::new("<", ">").unwrap();
        let b = Delimiters::new("[", "]").unwrap();
        assert_eq!(kv_format_with("<key1>", &args(), &a), "abc");
        assert_eq!(kv_format_with("[key1]", &args(), &b), "abc");
        assert_eq!(kv_format_with("<key1>", &args(), &b), "<key1>");
    }
}
