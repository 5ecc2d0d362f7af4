//! Host-independent representation of mergeable value trees.
//!
//! [`DynamicValue`] is a closed sum type, so every consumer matches it
//! exhaustively. Placeholders for values the host has not determined yet are a
//! first-class variant carrying a [`Shape`].

mod number;

use std::collections::BTreeMap;
use std::fmt;

pub use number::{Number, NumberError};

/// Entries of a [`DynamicValue::Mapping`].
pub type Mapping = BTreeMap<String, DynamicValue>;

/// Static description of the value an unknown placeholder will resolve to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A boolean.
    Bool,
    /// A number.
    Number,
    /// A string.
    String,
    /// A homogeneous list of the given element shape.
    List(Box<Self>),
    /// A set of the given element shape.
    Set(Box<Self>),
    /// A string-keyed map of the given element shape.
    Map(Box<Self>),
    /// An object with named attribute shapes.
    Object(BTreeMap<String, Self>),
    /// A fixed-arity tuple of element shapes.
    Tuple(Vec<Self>),
    /// No static constraint.
    Dynamic,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::List(element) => write!(f, "list({element})"),
            Self::Set(element) => write!(f, "set({element})"),
            Self::Map(element) => write!(f, "map({element})"),
            Self::Object(attributes) => {
                f.write_str("object({")?;
                for (index, (name, shape)) in attributes.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}={shape}")?;
                }
                f.write_str("})")
            }
            Self::Tuple(elements) => {
                f.write_str("tuple([")?;
                for (index, shape) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{shape}")?;
                }
                f.write_str("])")
            }
            Self::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// A node in a mergeable value tree.
///
/// Sequences keep their order. Mapping keys are unique; their iteration order
/// carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DynamicValue {
    /// An explicit null.
    Null,
    /// A value of the given shape that is not known yet.
    Unknown(Shape),
    /// A boolean.
    Bool(bool),
    /// An exact decimal number.
    Number(Number),
    /// A string.
    String(String),
    /// An ordered list or tuple.
    Sequence(Vec<Self>),
    /// A string-keyed map or object.
    Mapping(Mapping),
}

impl DynamicValue {
    /// An empty mapping.
    #[must_use]
    pub const fn empty_mapping() -> Self {
        Self::Mapping(BTreeMap::new())
    }

    /// Build a mapping from key/value pairs. Later duplicates win.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deepmerge::DynamicValue;
    ///
    /// let value = DynamicValue::mapping([("name", "demo".into()), ("port", 8080.into())]);
    /// assert_eq!(value.get("name"), Some(&DynamicValue::from("demo")));
    /// ```
    #[must_use]
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Build a sequence from its elements.
    #[must_use]
    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Unknown(_) => "unknown",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Returns `true` for [`DynamicValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`DynamicValue::Unknown`].
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Returns `true` when this value or any nested value is unknown.
    #[must_use]
    pub fn contains_unknown(&self) -> bool {
        match self {
            Self::Unknown(_) => true,
            Self::Sequence(elements) => elements.iter().any(Self::contains_unknown),
            Self::Mapping(entries) => entries.values().any(Self::contains_unknown),
            Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => false,
        }
    }

    /// Borrow the entries of a mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up `key` when this value is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for DynamicValue {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for DynamicValue {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i64> for DynamicValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for DynamicValue {
    fn from(value: Vec<Self>) -> Self {
        Self::Sequence(value)
    }
}

impl From<Mapping> for DynamicValue {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<Shape> for DynamicValue {
    fn from(value: Shape) -> Self {
        Self::Unknown(value)
    }
}
