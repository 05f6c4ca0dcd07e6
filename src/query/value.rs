//! GraphQL argument values.
//!
//! [`ArgValue`] is the closed set of values a caller can pass as a GraphQL
//! argument. Serialization dispatches on the variant; nothing is inferred
//! from string contents, so an enum symbol must be passed explicitly as
//! [`ArgValue::Raw`].

use crate::query::args::ArgMap;
use crate::query::errors::{is_graphql_name, QueryError};

/// A dynamically-typed GraphQL argument value.
///
/// # Example
///
/// ```rust
/// use monday_api::query::{ArgMap, ArgValue};
///
/// let value = ArgValue::from(ArgMap::new()
///     .arg("ids", vec![1, 2, 3])
///     .arg("state", ArgValue::raw("active"))
///     .arg("name", "Sprint \"7\""));
///
/// assert_eq!(
///     value.serialize().unwrap(),
///     r#"{ids: [1,2,3], state: active, name: "Sprint \"7\""}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// An integer literal.
    Int(i64),
    /// A float literal. Must be finite.
    Float(f64),
    /// A string, emitted as an escaped, double-quoted literal.
    String(String),
    /// A pre-formatted literal emitted verbatim, such as an enum symbol.
    Raw(String),
    /// An ordered list.
    List(Vec<ArgValue>),
    /// An input object, keys emitted in insertion order.
    Map(ArgMap),
}

impl ArgValue {
    /// Creates a literal that is emitted without quoting or escaping.
    ///
    /// The caller asserts the text is valid GraphQL, e.g. an enum value
    /// like `active` or `status`.
    #[must_use]
    pub fn raw(literal: impl Into<String>) -> Self {
        Self::Raw(literal.into())
    }

    /// Encodes a JSON document as a GraphQL *string* argument.
    ///
    /// monday.com takes `column_values` and `defaults` as JSON-encoded
    /// strings rather than input objects.
    ///
    /// ```rust
    /// use monday_api::query::ArgValue;
    /// use serde_json::json;
    ///
    /// let value = ArgValue::json(&json!({"status": {"label": "Done"}}));
    /// assert_eq!(
    ///     value.serialize().unwrap(),
    ///     r#""{\"status\":{\"label\":\"Done\"}}""#
    /// );
    /// ```
    #[must_use]
    pub fn json(value: &serde_json::Value) -> Self {
        Self::String(value.to_string())
    }

    /// Returns `true` for [`ArgValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Serializes this value into GraphQL argument syntax.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::ArgumentSerialization`] for a non-finite float,
    /// an empty raw literal, or a map key that is not a GraphQL name.
    pub fn serialize(&self) -> Result<String, QueryError> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Appends the serialized form of this value to `out`.
    ///
    /// On error `out` may hold a partial rendering.
    ///
    /// # Errors
    ///
    /// See [`ArgValue::serialize`].
    pub fn write_to(&self, out: &mut String) -> Result<(), QueryError> {
        match self {
            Self::Null => out.push_str("null"),
            Self::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Self::Int(i) => out.push_str(&i.to_string()),
            Self::Float(f) => {
                let number = serde_json::Number::from_f64(*f).ok_or_else(|| {
                    QueryError::argument(format!("float {f} has no GraphQL literal"))
                })?;
                out.push_str(&number.to_string());
            }
            Self::String(s) => {
                let quoted =
                    serde_json::to_string(s).map_err(|e| QueryError::argument(e.to_string()))?;
                out.push_str(&quoted);
            }
            Self::Raw(literal) => {
                if literal.trim().is_empty() {
                    return Err(QueryError::argument("raw literal is empty"));
                }
                out.push_str(literal);
            }
            Self::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_to(out)?;
                }
                out.push(']');
            }
            Self::Map(map) => {
                out.push('{');
                write_pairs(map, out)?;
                out.push('}');
            }
        }
        Ok(())
    }
}

/// Writes `key: value` pairs separated by `", "`.
pub(crate) fn write_pairs(map: &ArgMap, out: &mut String) -> Result<(), QueryError> {
    for (i, (key, value)) in map.iter().enumerate() {
        if !is_graphql_name(key) {
            return Err(QueryError::argument(format!(
                "`{key}` is not a valid GraphQL name"
            )));
        }
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(key);
        out.push_str(": ");
        value.write_to(out)?;
    }
    Ok(())
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ArgValue {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        // digits are a valid IntValue even past i64::MAX
        i64::try_from(value).map_or_else(|_| Self::Raw(value.to_string()), Self::Int)
    }
}

impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Raw(value.to_string()), Self::from)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl<T: Into<Self>> From<Vec<T>> for ArgValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for ArgValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for ArgValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<ArgMap> for ArgValue {
    fn from(map: ArgMap) -> Self {
        Self::Map(map)
    }
}

impl From<serde_json::Value> for ArgValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::from(u)
                } else {
                    // always finite when parsed from JSON
                    Self::Float(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(object) => Self::Map(object.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ser(value: impl Into<ArgValue>) -> String {
        value.into().serialize().unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(ArgValue::Null.serialize().unwrap(), "null");
        assert_eq!(ser(true), "true");
        assert_eq!(ser(false), "false");
        assert_eq!(ser(42), "42");
        assert_eq!(ser(-7_i64), "-7");
        assert_eq!(ser(1.5), "1.5");
        assert_eq!(ser(2.0), "2.0");
        assert_eq!(ser(-0.25_f32), "-0.25");
    }

    #[test]
    fn test_float_uses_shortest_round_trip_form() {
        assert_eq!(ser(0.1), "0.1");
        assert_eq!(ser(1e300), "1e300");
        let text = ser(std::f64::consts::PI);
        assert_eq!(text.parse::<f64>().unwrap(), std::f64::consts::PI);
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ArgValue::Float(f).serialize(),
                Err(QueryError::ArgumentSerialization { .. })
            ));
        }
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(ser("plain"), r#""plain""#);
        assert_eq!(
            ser("quote\"and\\backslash"),
            r#""quote\"and\\backslash""#
        );
        assert_eq!(ser("line\nbreak\ttab"), r#""line\nbreak\ttab""#);
        assert_eq!(ser("\u{1}"), r#""\u0001""#);
        assert_eq!(ser("héllo ✓"), "\"héllo ✓\"");
    }

    #[test]
    fn test_string_decodes_back_to_original() {
        let original = "quote\"and\\backslash\r\n\u{7f}";
        let text = ser(original);
        // a GraphQL string literal is a JSON string literal
        let decoded: String = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_raw_literal_is_verbatim() {
        assert_eq!(ArgValue::raw("active").serialize().unwrap(), "active");
        assert_eq!(ArgValue::raw("[1,2,3]").serialize().unwrap(), "[1,2,3]");
        assert!(matches!(
            ArgValue::raw("  ").serialize(),
            Err(QueryError::ArgumentSerialization { .. })
        ));
    }

    #[test]
    fn test_empty_collections_are_distinct_from_null() {
        assert_eq!(ArgValue::List(Vec::new()).serialize().unwrap(), "[]");
        assert_eq!(ArgValue::Map(ArgMap::new()).serialize().unwrap(), "{}");
        assert_eq!(ArgValue::from(None::<i32>).serialize().unwrap(), "null");
    }

    #[test]
    fn test_nested_lists_and_maps() {
        let rule = ArgMap::new()
            .arg("column_id", "status")
            .arg("compare_value", [1, 2]);
        let value = ArgValue::from(
            ArgMap::new()
                .arg("rules", vec![rule])
                .arg("operator", ArgValue::raw("and")),
        );
        assert_eq!(
            value.serialize().unwrap(),
            r#"{rules: [{column_id: "status", compare_value: [1,2]}], operator: and}"#
        );
    }

    #[test]
    fn test_map_key_must_be_graphql_name() {
        let value = ArgValue::from(ArgMap::new().arg("bad key", 1));
        let err = value.serialize().unwrap_err();
        assert!(err.to_string().contains("bad key"));
    }

    #[test]
    fn test_large_unsigned_stays_integral() {
        assert_eq!(ser(u64::MAX), "18446744073709551615");
        assert_eq!(ser(7_u64), "7");
        assert_eq!(ArgValue::from(7_u64), ArgValue::Int(7));
    }

    #[test]
    fn test_from_json_value() {
        let value = ArgValue::from(json!({
            "ids": [1, 2, 3],
            "name": "x",
            "ratio": 0.5,
            "archived": false,
            "owner": null
        }));
        let text = value.serialize().unwrap();
        assert!(text.starts_with('{') && text.ends_with('}'));
        assert!(text.contains("ids: [1,2,3]"));
        assert!(text.contains(r#"name: "x""#));
        assert!(text.contains("ratio: 0.5"));
        assert!(text.contains("archived: false"));
        assert!(text.contains("owner: null"));
    }

    #[test]
    fn test_json_string_argument() {
        let value = ArgValue::json(&json!({"text": "a\"b"}));
        let text = value.serialize().unwrap();
        let decoded: String = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, r#"{"text":"a\"b"}"#);
    }
}
