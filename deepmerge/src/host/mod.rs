//! Typed attribute values as exchanged with the evaluation host.
//!
//! The host tracks a static type for every value, including nulls and values
//! that are not known until a later evaluation phase. Only [`crate::codec`]
//! translates between these values and [`crate::DynamicValue`].

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::value::Number;

/// Static type of a host value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    /// UTF-8 string.
    String,
    /// Arbitrary-precision number.
    Number,
    /// Boolean.
    Bool,
    /// Homogeneous list.
    List(Box<Self>),
    /// Homogeneous set.
    Set(Box<Self>),
    /// Homogeneous string-keyed map.
    Map(Box<Self>),
    /// Object with named attribute types.
    Object(BTreeMap<String, Self>),
    /// Fixed-arity tuple.
    Tuple(Vec<Self>),
    /// Type decided at runtime.
    Dynamic,
    /// Opaque host-specific type identified by name.
    Capsule(String),
}

/// A host attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostValue {
    /// Null of the given type.
    Null(HostType),
    /// Not yet known value of the given type.
    Unknown(HostType),
    /// Known string.
    String(String),
    /// Known number.
    Number(Number),
    /// Known boolean.
    Bool(bool),
    /// Known list.
    List {
        /// Declared element type.
        element_type: HostType,
        /// Elements in order.
        elements: Vec<Self>,
    },
    /// Known set. Element order is the host's iteration order.
    Set {
        /// Declared element type.
        element_type: HostType,
        /// Elements in host iteration order.
        elements: Vec<Self>,
    },
    /// Known tuple; element types follow the elements.
    Tuple(Vec<Self>),
    /// Known map.
    Map {
        /// Declared element type.
        element_type: HostType,
        /// Entries by key.
        elements: BTreeMap<String, Self>,
    },
    /// Known object; attribute types follow the attributes.
    Object(BTreeMap<String, Self>),
    /// Dynamically typed wrapper around an underlying value.
    Dynamic(Box<Self>),
    /// Opaque capsule value.
    Capsule {
        /// Name of the capsule type.
        type_name: String,
    },
}

impl HostValue {
    /// A null of dynamic type.
    #[must_use]
    pub const fn dynamic_null() -> Self {
        Self::Null(HostType::Dynamic)
    }

    /// An unknown of dynamic type.
    #[must_use]
    pub const fn dynamic_unknown() -> Self {
        Self::Unknown(HostType::Dynamic)
    }

    /// Wrap `value` as a dynamically typed value.
    #[must_use]
    pub fn dynamic(value: Self) -> Self {
        Self::Dynamic(Box::new(value))
    }

    /// A known string.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// A known object built from attribute pairs.
    #[must_use]
    pub fn object<K, I>(attributes: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Object(
            attributes
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// The value beneath any number of [`HostValue::Dynamic`] wrappers.
    #[must_use]
    pub fn underlying(&self) -> &Self {
        let mut current = self;
        while let Self::Dynamic(inner) = current {
            current = inner;
        }
        current
    }

    /// Returns `true` when the underlying value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.underlying(), Self::Null(_))
    }

    /// Returns `true` when the underlying value is unknown.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self.underlying(), Self::Unknown(_))
    }

    /// Static type of this value.
    #[must_use]
    pub fn host_type(&self) -> HostType {
        match self {
            Self::Null(ty) | Self::Unknown(ty) => ty.clone(),
            Self::String(_) => HostType::String,
            Self::Number(_) => HostType::Number,
            Self::Bool(_) => HostType::Bool,
            Self::List { element_type, .. } => HostType::List(Box::new(element_type.clone())),
            Self::Set { element_type, .. } => HostType::Set(Box::new(element_type.clone())),
            Self::Map { element_type, .. } => HostType::Map(Box::new(element_type.clone())),
            Self::Tuple(elements) => HostType::Tuple(elements.iter().map(Self::host_type).collect()),
            Self::Object(attributes) => HostType::Object(
                attributes
                    .iter()
                    .map(|(name, value)| (name.clone(), value.host_type()))
                    .collect(),
            ),
            Self::Dynamic(_) => HostType::Dynamic,
            Self::Capsule { type_name } => HostType::Capsule(type_name.clone()),
        }
    }

    /// Short description of the value kind, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> Cow<'static, str> {
        match self {
            Self::Dynamic(inner) => inner.kind(),
            Self::Null(_) => Cow::Borrowed("null"),
            Self::Unknown(_) => Cow::Borrowed("unknown"),
            Self::String(_) => Cow::Borrowed("string"),
            Self::Number(_) => Cow::Borrowed("number"),
            Self::Bool(_) => Cow::Borrowed("bool"),
            Self::List { .. } => Cow::Borrowed("list"),
            Self::Set { .. } => Cow::Borrowed("set"),
            Self::Tuple(_) => Cow::Borrowed("tuple"),
            Self::Map { .. } => Cow::Borrowed("map"),
            Self::Object(_) => Cow::Borrowed("object"),
            Self::Capsule { type_name } => Cow::Owned(format!("capsule({type_name})")),
        }
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for HostValue {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for HostValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i32> for HostValue {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}
