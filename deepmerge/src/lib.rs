//! Recursive deep merge of dynamic configuration values.
//!
//! The crate provides the `mergo` function for a configuration-evaluation
//! host. A call decodes each argument from the host's typed attribute values
//! into [`DynamicValue`] trees, separates directive strings from data maps,
//! folds the maps left to right under the resulting [`MergeOptions`], and
//! encodes the merged tree back into a host value.
//!
//! Values the host has not determined yet are carried as
//! [`DynamicValue::Unknown`] and stay unknown through every merge that touches
//! them, so a later evaluation phase can resolve them.
//!
//! ```rust
//! use deepmerge::{DynamicValue, Directive, MergeOptions, merge};
//!
//! let base = DynamicValue::mapping([("tags", DynamicValue::sequence(["a".into(), "b".into()]))]);
//! let layer = DynamicValue::mapping([("tags", DynamicValue::sequence(["b".into(), "c".into()]))]);
//!
//! let merged = merge(&[base, layer], MergeOptions::from_directives([Directive::UnionLists]));
//! assert_eq!(
//!     merged.get("tags"),
//!     Some(&DynamicValue::sequence(["a".into(), "b".into(), "c".into()]))
//! );
//! ```

pub mod arguments;
pub mod codec;
mod config;
mod error;
mod function;
pub mod host;
#[cfg(feature = "serde_json")]
pub mod json;
mod merge;
mod options;
mod provider;
mod result_ext;
mod value;

pub use config::{CONFIG_FILE_NAME, ENV_PREFIX, EmptyInputPolicy, ProviderConfig};
pub use error::{ArgumentError, ConfigError, EMPTY_INPUT_MESSAGE, FunctionError};
pub use function::{
    Function, FunctionDefinition, FunctionMetadata, MERGO, MergoFunction, Parameter,
};
pub use merge::{merge, merge_two};
pub use options::{Directive, ListStrategy, MergeOptions};
pub use provider::{DeepmergeProvider, PROVIDER_NAME, ProviderMetadata};
pub use result_ext::{AtPosition, ConfigResultExt};
pub use value::{DynamicValue, Mapping, Number, NumberError, Shape};

#[cfg(feature = "serde_json")]
pub use serde_json;
