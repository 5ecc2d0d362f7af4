//! Exact decimal numbers carried through merges without arithmetic.
//!
//! Host numbers may exceed the range and precision of `f64`, so values are
//! held as [`BigDecimal`]. Equality is numeric, which makes `1`, `1.0` and
//! `10e-1` compare equal.

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use thiserror::Error;

/// Errors produced while constructing a [`Number`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NumberError {
    /// The text is not a decimal literal.
    #[error("'{text}' is not a decimal number")]
    Malformed {
        /// Offending input.
        text: String,
    },

    /// NaN and infinities have no decimal form.
    #[error("non-finite value {value} cannot be represented")]
    NonFinite {
        /// Rendered floating-point value.
        value: String,
    },
}

/// An exact decimal number.
///
/// # Examples
///
/// ```rust
/// use deepmerge::Number;
///
/// let big: Number = "123456789012345678901234567890.5".parse()?;
/// assert_eq!(big.to_string(), "123456789012345678901234567890.5");
/// assert_eq!("1.50".parse::<Number>()?, "15e-1".parse::<Number>()?);
/// # Ok::<_, deepmerge::NumberError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Number(BigDecimal);

impl Number {
    /// Returns `true` when the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Converts to `i64` when the value is an integer within range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if self.0.is_integer() {
            self.0.to_i64()
        } else {
            None
        }
    }

    /// Borrow the underlying decimal.
    #[must_use]
    pub const fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.parse::<BigDecimal>()
            .map(Self)
            .map_err(|_| NumberError::Malformed {
                text: text.to_owned(),
            })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl TryFrom<f64> for Number {
    type Error = NumberError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumberError::NonFinite {
                value: value.to_string(),
            });
        }
        value.to_string().parse()
    }
}
