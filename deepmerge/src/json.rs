//! Conversion between JSON documents and [`DynamicValue`] trees.
//!
//! Hosts that exchange JSON, and tests that want concise fixtures, can build
//! merge inputs from [`serde_json::Value`]. Numbers pass through as exact
//! decimal text. Unknown placeholders have no JSON form.

use serde_json::Value;
use thiserror::Error;

use crate::codec::{PathSegment, ValuePath};
use crate::value::{DynamicValue, Mapping, Number, NumberError, Shape};

/// Failure converting between JSON and [`DynamicValue`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JsonError {
    /// Unknown placeholders cannot be written as JSON.
    #[error("unknown {shape} value at {path} has no JSON representation")]
    Unknown {
        /// Location of the placeholder.
        path: ValuePath,
        /// Shape it was expected to resolve to.
        shape: Shape,
    },

    /// A JSON number could not be read as a decimal.
    #[error(transparent)]
    Number(#[from] NumberError),

    /// A decimal does not fit a JSON number.
    #[error("number {text} cannot be represented in JSON")]
    UnrepresentableNumber {
        /// Decimal text of the number.
        text: String,
    },
}

/// Convert a JSON document into a [`DynamicValue`].
///
/// # Errors
///
/// Returns [`JsonError::Number`] if a JSON number is not a decimal literal.
///
/// # Examples
///
/// ```rust
/// use deepmerge::json::from_json;
/// use deepmerge::DynamicValue;
/// use serde_json::json;
///
/// let value = from_json(&json!({"a": [1, "two", null]}))?;
/// assert_eq!(
///     value,
///     DynamicValue::mapping([(
///         "a",
///         DynamicValue::sequence([1.into(), "two".into(), DynamicValue::Null]),
///     )])
/// );
/// # Ok::<_, deepmerge::json::JsonError>(())
/// ```
pub fn from_json(value: &Value) -> Result<DynamicValue, JsonError> {
    Ok(match value {
        Value::Null => DynamicValue::Null,
        Value::Bool(flag) => DynamicValue::Bool(*flag),
        Value::Number(number) => DynamicValue::Number(number.to_string().parse()?),
        Value::String(text) => DynamicValue::String(text.clone()),
        Value::Array(elements) => DynamicValue::Sequence(
            elements
                .iter()
                .map(from_json)
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(entries) => DynamicValue::Mapping(
            entries
                .iter()
                .map(|(key, entry)| Ok((key.clone(), from_json(entry)?)))
                .collect::<Result<Mapping, JsonError>>()?,
        ),
    })
}

/// Convert a [`DynamicValue`] into a JSON document.
///
/// # Errors
///
/// Returns [`JsonError::Unknown`] for the first unknown placeholder found, or
/// [`JsonError::UnrepresentableNumber`] for numbers JSON cannot carry.
pub fn to_json(value: &DynamicValue) -> Result<Value, JsonError> {
    let mut path = ValuePath::root();
    to_json_at(value, &mut path)
}

fn to_json_at(value: &DynamicValue, path: &mut ValuePath) -> Result<Value, JsonError> {
    match value {
        DynamicValue::Null => Ok(Value::Null),
        DynamicValue::Unknown(shape) => Err(JsonError::Unknown {
            path: path.clone(),
            shape: shape.clone(),
        }),
        DynamicValue::Bool(flag) => Ok(Value::Bool(*flag)),
        DynamicValue::Number(number) => number_to_json(number),
        DynamicValue::String(text) => Ok(Value::String(text.clone())),
        DynamicValue::Sequence(elements) => {
            let mut converted = Vec::with_capacity(elements.len());
            for (index, element) in elements.iter().enumerate() {
                path.push(PathSegment::Index(index));
                let item = to_json_at(element, path);
                path.pop();
                converted.push(item?);
            }
            Ok(Value::Array(converted))
        }
        DynamicValue::Mapping(entries) => {
            let mut converted = serde_json::Map::new();
            for (key, entry) in entries {
                path.push(PathSegment::Key(key.clone()));
                let item = to_json_at(entry, path);
                path.pop();
                converted.insert(key.clone(), item?);
            }
            Ok(Value::Object(converted))
        }
    }
}

fn number_to_json(number: &Number) -> Result<Value, JsonError> {
    let text = number.to_string();
    text.parse::<serde_json::Number>()
        .map(Value::Number)
        .map_err(|_| JsonError::UnrepresentableNumber { text })
}

impl TryFrom<&Value> for DynamicValue {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        from_json(value)
    }
}

impl TryFrom<Value> for DynamicValue {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        from_json(&value)
    }
}

impl TryFrom<&DynamicValue> for Value {
    type Error = JsonError;

    fn try_from(value: &DynamicValue) -> Result<Self, Self::Error> {
        to_json(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{JsonError, from_json, to_json};
    use crate::value::{DynamicValue, Shape};

    #[test]
    fn json_documents_round_trip() {
        let document = json!({
            "name": "demo",
            "enabled": true,
            "ratio": 0.25,
            "tags": ["a", "b"],
            "nested": {"empty": null, "list": [[1], {"k": "v"}]},
        });
        let value = from_json(&document).expect("decodes");
        assert_eq!(to_json(&value), Ok(document));
    }

    #[test]
    fn large_numbers_keep_their_digits() {
        let document: serde_json::Value =
            serde_json::from_str(r#"{"n": 12345678901234567890.123456789}"#).expect("valid JSON");
        let value = from_json(&document).expect("decodes");
        let Some(DynamicValue::Number(number)) = value.get("n") else {
            panic!("expected number");
        };
        assert_eq!(number.to_string(), "12345678901234567890.123456789");
    }

    #[test]
    fn unknowns_report_their_location() {
        let value = DynamicValue::mapping([(
            "outer",
            DynamicValue::sequence([DynamicValue::Null, DynamicValue::Unknown(Shape::String)]),
        )]);
        let Err(JsonError::Unknown { path, shape }) = to_json(&value) else {
            panic!("unknown must not serialise");
        };
        assert_eq!(path.to_string(), "$.outer[1]");
        assert_eq!(shape, Shape::String);
    }
}
