//! Extensions for mapping errors into the crate's error types concisely.
//!
//! - Use [`AtPosition::at`] to lift anything convertible into an
//!   [`ArgumentError`] into a [`FunctionError`] carrying the argument's
//!   0-based position.
//! - Use [`ConfigResultExt::into_config`] for `figment::Error` results raised
//!   while loading [`crate::ProviderConfig`].
//!
//! # Examples
//!
//! ```
//! use deepmerge::{ArgumentError, AtPosition, FunctionError};
//!
//! let parsed: Result<(), ArgumentError> = Err(ArgumentError::unrecognised("bogus"));
//! let err = parsed.at(2).unwrap_err();
//! assert_eq!(err.position(), Some(2));
//! assert_eq!(err.to_string(), "argument 2: unrecognised option");
//! ```

use crate::{ArgumentError, ConfigError, FunctionError};

/// Attach an argument position to a failed result.
pub trait AtPosition<T> {
    /// Convert the error into [`FunctionError::Argument`] at `position`.
    ///
    /// # Errors
    ///
    /// Propagates the original error, tagged with `position`.
    fn at(self, position: usize) -> Result<T, FunctionError>;
}

impl<T, E> AtPosition<T> for Result<T, E>
where
    E: Into<ArgumentError>,
{
    fn at(self, position: usize) -> Result<T, FunctionError> {
        self.map_err(|err| FunctionError::argument(position, err.into()))
    }
}

/// Map `figment::Error` results into [`ConfigError`].
pub trait ConfigResultExt<T> {
    /// Convert `Result<T, figment::Error>` into `Result<T, ConfigError>`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Extract`] when the input is `Err`.
    fn into_config(self) -> Result<T, ConfigError>;
}

impl<T> ConfigResultExt<T> for Result<T, figment::Error> {
    fn into_config(self) -> Result<T, ConfigError> {
        self.map_err(ConfigError::from)
    }
}
