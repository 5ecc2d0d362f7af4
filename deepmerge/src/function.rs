//! Callable functions exposed to the evaluation host.

use tracing::debug;

use crate::arguments::{Partition, partition};
use crate::codec::encode;
use crate::config::ProviderConfig;
use crate::host::{HostType, HostValue};
use crate::merge::merge;
use crate::options::MergeOptions;
use crate::{ConfigError, FunctionError};

/// Name under which [`MergoFunction`] is registered.
pub const MERGO: &str = "mergo";

const MERGO_SUMMARY: &str = "Deepmerge of maps with mergo semantics";

const MERGO_DESCRIPTION: &str = "`mergo` takes an arbitrary number of maps or objects, and returns a \
single map or object that contains a recursively merged set of elements from all arguments.\n\n\
By default, values in later arguments override those in earlier arguments. The merge behaviour can \
be adjusted by passing additional string arguments to the function:\n\n\
* `\"override\"` or `\"replace\"` (default): New values override existing values.\n\
* `\"no_override\"`: New values do not override existing values.\n\
* `\"no_null_override\"`: Explicit null values do not override existing values.\n\
* `\"append\"` or `\"append_lists\"`: Append list values instead of replacing them.\n\
* `\"union\"` or `\"union_lists\"`: Append list values, dropping repeated elements.";

/// Identity of a function within its provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionMetadata {
    /// Name used to call the function.
    pub name: &'static str,
}

/// Description of one parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: &'static str,
    /// Markdown description.
    pub description: &'static str,
    /// Accepted type.
    pub ty: HostType,
    /// Whether null arguments are passed through instead of rejected.
    pub allow_null: bool,
    /// Whether unknown arguments are passed through instead of short-circuited
    /// by the host.
    pub allow_unknown: bool,
}

/// Signature and documentation of a function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDefinition {
    /// One-line summary.
    pub summary: &'static str,
    /// Markdown description.
    pub description: &'static str,
    /// Fixed leading parameters.
    pub parameters: Vec<Parameter>,
    /// Trailing variadic parameter, if any.
    pub variadic: Option<Parameter>,
    /// Return type.
    pub returns: HostType,
}

/// A function the host can call during evaluation.
pub trait Function: Send + Sync {
    /// Name and identity.
    fn metadata(&self) -> FunctionMetadata;

    /// Signature and documentation.
    fn definition(&self) -> FunctionDefinition;

    /// Evaluate the function.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError`] when the arguments are rejected.
    fn run(&self, arguments: &[HostValue]) -> Result<HostValue, FunctionError>;
}

/// The `mergo` deep-merge function.
///
/// # Examples
///
/// ```rust
/// use deepmerge::host::HostValue;
/// use deepmerge::{Function, MergoFunction};
///
/// let mergo = MergoFunction::default();
/// let result = mergo.run(&[
///     HostValue::object([("a", HostValue::from(1))]),
///     HostValue::object([("a", HostValue::from(2))]),
///     HostValue::string("no_override"),
/// ])?;
/// assert_eq!(
///     result,
///     HostValue::dynamic(HostValue::object([("a", HostValue::from(1))]))
/// );
/// # Ok::<_, deepmerge::FunctionError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MergoFunction {
    config: ProviderConfig,
    base: MergeOptions,
}

impl MergoFunction {
    /// Build the function from validated provider configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDirective`] when a default directive is
    /// not recognised.
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        let base = config.base_options()?;
        Ok(Self { config, base })
    }

    /// Options every call starts from.
    #[must_use]
    pub const fn base_options(&self) -> MergeOptions {
        self.base
    }
}

impl Function for MergoFunction {
    fn metadata(&self) -> FunctionMetadata {
        FunctionMetadata { name: MERGO }
    }

    fn definition(&self) -> FunctionDefinition {
        FunctionDefinition {
            summary: MERGO_SUMMARY,
            description: MERGO_DESCRIPTION,
            parameters: Vec::new(),
            variadic: Some(Parameter {
                name: "maps",
                description: "Maps to merge",
                ty: HostType::Dynamic,
                allow_null: true,
                allow_unknown: true,
            }),
            returns: HostType::Dynamic,
        }
    }

    fn run(&self, arguments: &[HostValue]) -> Result<HostValue, FunctionError> {
        let (maps, options) = match partition(arguments, self.base)? {
            Partition::Known { maps, options } => (maps, options),
            Partition::Unknown => return Ok(HostValue::dynamic_unknown()),
        };
        self.config.empty_input.check(maps.len())?;
        debug!(
            arguments = arguments.len(),
            maps = maps.len(),
            ?options,
            "merging"
        );
        let merged = merge(&maps, options);
        Ok(HostValue::dynamic(encode(&merged)))
    }
}
