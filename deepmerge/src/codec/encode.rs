//! [`DynamicValue`] to host value translation.

use crate::host::{HostType, HostValue};
use crate::value::{DynamicValue, Shape};

/// Translate `value` into a host value.
///
/// Nulls become dynamic nulls, sequences become tuples and mappings become
/// objects, so the host infers element types from the merged content.
/// Unknown placeholders become host unknowns of their recorded shape, which
/// the host resolves in a later evaluation phase.
#[must_use]
pub fn encode(value: &DynamicValue) -> HostValue {
    match value {
        DynamicValue::Null => HostValue::dynamic_null(),
        DynamicValue::Unknown(shape) => HostValue::Unknown(HostType::from(shape)),
        DynamicValue::Bool(flag) => HostValue::Bool(*flag),
        DynamicValue::Number(number) => HostValue::Number(number.clone()),
        DynamicValue::String(text) => HostValue::String(text.clone()),
        DynamicValue::Sequence(elements) => HostValue::Tuple(elements.iter().map(encode).collect()),
        DynamicValue::Mapping(entries) => HostValue::Object(
            entries
                .iter()
                .map(|(key, entry)| (key.clone(), encode(entry)))
                .collect(),
        ),
    }
}

impl From<&Shape> for HostType {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Bool => Self::Bool,
            Shape::Number => Self::Number,
            Shape::String => Self::String,
            Shape::List(element) => Self::List(Box::new(Self::from(element.as_ref()))),
            Shape::Set(element) => Self::Set(Box::new(Self::from(element.as_ref()))),
            Shape::Map(element) => Self::Map(Box::new(Self::from(element.as_ref()))),
            Shape::Object(attributes) => Self::Object(
                attributes
                    .iter()
                    .map(|(name, attribute)| (name.clone(), Self::from(attribute)))
                    .collect(),
            ),
            Shape::Tuple(elements) => Self::Tuple(elements.iter().map(Self::from).collect()),
            Shape::Dynamic => Self::Dynamic,
        }
    }
}
