//! Host value to [`DynamicValue`] translation.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::host::{HostType, HostValue};
use crate::value::{DynamicValue, Mapping, Shape};

use super::path::{PathSegment, ValuePath};

/// Failure to translate a host value into the merge model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The host value kind has no dynamic counterpart.
    #[error("unsupported {kind} value at {path}")]
    UnsupportedKind {
        /// Location of the offending value.
        path: ValuePath,
        /// Kind of the offending value.
        kind: String,
    },
}

/// Translate `value` into a [`DynamicValue`].
///
/// Nulls of any type decode to [`DynamicValue::Null`]; unknowns keep a
/// [`Shape`] derived from their host type; lists, sets and tuples become
/// sequences; maps and objects become mappings. Dynamic wrappers are
/// transparent.
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedKind`] when the tree contains a known
/// capsule value.
///
/// # Examples
///
/// ```rust
/// use deepmerge::codec::decode;
/// use deepmerge::host::{HostType, HostValue};
/// use deepmerge::{DynamicValue, Shape};
///
/// let host = HostValue::object([
///     ("name", HostValue::string("demo")),
///     ("id", HostValue::Unknown(HostType::Number)),
/// ]);
/// let value = decode(&host)?;
/// assert_eq!(value.get("id"), Some(&DynamicValue::Unknown(Shape::Number)));
/// # Ok::<_, deepmerge::codec::DecodeError>(())
/// ```
pub fn decode(value: &HostValue) -> Result<DynamicValue, DecodeError> {
    let mut path = ValuePath::root();
    decode_at(value, &mut path)
}

fn decode_at(value: &HostValue, path: &mut ValuePath) -> Result<DynamicValue, DecodeError> {
    match value {
        HostValue::Null(_) => Ok(DynamicValue::Null),
        HostValue::Unknown(ty) => Ok(DynamicValue::Unknown(Shape::from(ty))),
        HostValue::String(text) => Ok(DynamicValue::String(text.clone())),
        HostValue::Number(number) => Ok(DynamicValue::Number(number.clone())),
        HostValue::Bool(flag) => Ok(DynamicValue::Bool(*flag)),
        HostValue::List { elements, .. }
        | HostValue::Set { elements, .. }
        | HostValue::Tuple(elements) => decode_sequence(elements, path),
        HostValue::Map { elements, .. } | HostValue::Object(elements) => {
            decode_mapping(elements, path)
        }
        HostValue::Dynamic(inner) => decode_at(inner, path),
        HostValue::Capsule { .. } => Err(DecodeError::UnsupportedKind {
            path: path.clone(),
            kind: value.kind().into_owned(),
        }),
    }
}

fn decode_sequence(
    elements: &[HostValue],
    path: &mut ValuePath,
) -> Result<DynamicValue, DecodeError> {
    let mut decoded = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        path.push(PathSegment::Index(index));
        let item = decode_at(element, path);
        path.pop();
        decoded.push(item?);
    }
    Ok(DynamicValue::Sequence(decoded))
}

fn decode_mapping(
    entries: &BTreeMap<String, HostValue>,
    path: &mut ValuePath,
) -> Result<DynamicValue, DecodeError> {
    let mut decoded = Mapping::new();
    for (key, entry) in entries {
        path.push(PathSegment::Key(key.clone()));
        let item = decode_at(entry, path);
        path.pop();
        decoded.insert(key.clone(), item?);
    }
    Ok(DynamicValue::Mapping(decoded))
}

impl From<&HostType> for Shape {
    /// Capsule types have no shape and degrade to [`Shape::Dynamic`].
    fn from(ty: &HostType) -> Self {
        match ty {
            HostType::String => Self::String,
            HostType::Number => Self::Number,
            HostType::Bool => Self::Bool,
            HostType::List(element) => Self::List(Box::new(Self::from(element.as_ref()))),
            HostType::Set(element) => Self::Set(Box::new(Self::from(element.as_ref()))),
            HostType::Map(element) => Self::Map(Box::new(Self::from(element.as_ref()))),
            HostType::Object(attributes) => Self::Object(
                attributes
                    .iter()
                    .map(|(name, attribute)| (name.clone(), Self::from(attribute)))
                    .collect(),
            ),
            HostType::Tuple(elements) => Self::Tuple(elements.iter().map(Self::from).collect()),
            HostType::Dynamic | HostType::Capsule(_) => Self::Dynamic,
        }
    }
}
