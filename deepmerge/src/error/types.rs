//! Error enums surfaced by the `mergo` function and its configuration.

use thiserror::Error;

use crate::codec::DecodeError;

/// Problems with a single argument of a `mergo` call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgumentError {
    /// The argument is neither a map/object nor a directive string.
    #[error("unsupported {kind} argument")]
    UnsupportedKind {
        /// Observed kind of the argument.
        kind: String,
    },

    /// A string argument did not match any directive.
    #[error("unrecognised option")]
    UnrecognisedOption {
        /// The rejected directive text.
        option: String,
    },

    /// A map argument could not be translated into the merge model.
    #[error("failed to decode argument: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors returned to the host from a function call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum FunctionError {
    /// An argument was rejected. `position` is 0-based.
    #[error("argument {position}: {source}")]
    Argument {
        /// 0-based position of the offending argument.
        position: usize,
        /// What was wrong with it.
        #[source]
        source: ArgumentError,
    },

    /// The call as a whole was rejected.
    #[error("{message}")]
    Call {
        /// Human-readable description.
        message: String,
    },
}

/// Errors raised while loading provider configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Figment could not extract the configuration.
    #[error("failed to load provider configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// A configured default directive is not recognised.
    #[error("invalid default directive '{option}'")]
    InvalidDirective {
        /// The rejected directive text.
        option: String,
    },
}
