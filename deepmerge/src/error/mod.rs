//! Error types produced by argument handling and configuration loading.

mod constructors;
mod types;

pub use constructors::EMPTY_INPUT_MESSAGE;
pub use types::{ArgumentError, ConfigError, FunctionError};
