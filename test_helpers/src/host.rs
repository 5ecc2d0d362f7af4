//! Builders for host argument values.
//!
//! Fixtures are written as JSON and converted the way a configuration host
//! would present literals: objects become host objects, arrays become tuples
//! and `null` becomes a dynamically typed null.

use anyhow::{Context, Result};
use deepmerge::codec::decode;
use deepmerge::host::{HostType, HostValue};
use deepmerge::json::to_json;
use deepmerge::Number;
use serde_json::Value;

/// Convert a JSON fixture into the host value a literal would evaluate to.
///
/// # Errors
///
/// Returns an error if a JSON number is not a decimal literal.
///
/// # Examples
///
/// ```
/// use deepmerge::host::HostValue;
/// use deepmerge_test_helpers::host::host_from_json;
/// use serde_json::json;
///
/// let value = host_from_json(&json!({"a": "x"}))?;
/// assert_eq!(value, HostValue::object([("a", HostValue::string("x"))]));
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn host_from_json(value: &Value) -> Result<HostValue> {
    Ok(match value {
        Value::Null => HostValue::dynamic_null(),
        Value::Bool(flag) => HostValue::Bool(*flag),
        Value::Number(number) => HostValue::Number(
            number
                .to_string()
                .parse::<Number>()
                .with_context(|| format!("fixture number {number}"))?,
        ),
        Value::String(text) => HostValue::string(text.as_str()),
        Value::Array(elements) => HostValue::Tuple(
            elements
                .iter()
                .map(host_from_json)
                .collect::<Result<_>>()?,
        ),
        Value::Object(entries) => HostValue::Object(
            entries
                .iter()
                .map(|(key, entry)| Ok((key.clone(), host_from_json(entry)?)))
                .collect::<Result<_>>()?,
        ),
    })
}

/// Convert a list of JSON fixtures into call arguments.
///
/// # Errors
///
/// Returns an error if any fixture fails to convert.
pub fn arguments(values: &[Value]) -> Result<Vec<HostValue>> {
    values.iter().map(host_from_json).collect()
}

/// Read a fully known function result back as JSON.
///
/// # Errors
///
/// Returns an error if the result cannot be decoded or still holds unknowns.
pub fn json_from_host(value: &HostValue) -> Result<Value> {
    let decoded = decode(value).context("decode result")?;
    to_json(&decoded).context("result as JSON")
}

/// A not yet known value of the given type.
#[must_use]
pub const fn unknown(ty: HostType) -> HostValue {
    HostValue::Unknown(ty)
}

/// An object holding a single attribute that is not yet known.
#[must_use]
pub fn object_with_unknown(name: &str, ty: HostType) -> HostValue {
    HostValue::object([(name, HostValue::Unknown(ty))])
}
