//! Constructors for the function error types.

use super::{ArgumentError, ConfigError, FunctionError};

/// Message returned when the `reject` empty-input policy fires.
pub const EMPTY_INPUT_MESSAGE: &str = "at least one map must be provided";

impl ArgumentError {
    /// Build an [`ArgumentError::UnsupportedKind`].
    ///
    /// # Examples
    ///
    /// ```
    /// use deepmerge::ArgumentError;
    /// let e = ArgumentError::unsupported("bool");
    /// assert_eq!(e.to_string(), "unsupported bool argument");
    /// ```
    #[must_use]
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedKind { kind: kind.into() }
    }

    /// Build an [`ArgumentError::UnrecognisedOption`].
    #[must_use]
    pub fn unrecognised(option: impl Into<String>) -> Self {
        Self::UnrecognisedOption {
            option: option.into(),
        }
    }
}

impl FunctionError {
    /// Attach `position` to an argument error.
    #[must_use]
    pub const fn argument(position: usize, source: ArgumentError) -> Self {
        Self::Argument { position, source }
    }

    /// Build a call-level error.
    #[must_use]
    pub fn call(message: impl Into<String>) -> Self {
        Self::Call {
            message: message.into(),
        }
    }

    /// The call-level error for a merge without data maps.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::call(EMPTY_INPUT_MESSAGE)
    }

    /// 0-based position of the offending argument, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Argument { position, .. } => Some(*position),
            Self::Call { .. } => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(source: figment::Error) -> Self {
        Self::Extract(Box::new(source))
    }
}
