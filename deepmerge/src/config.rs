//! Provider-level configuration for the `mergo` function.
//!
//! Settings are layered with Figment: built-in defaults, then an optional
//! TOML file, then `DEEPMERGE_`-prefixed environment variables.
//!
//! ```toml
//! empty_input = "reject"
//! default_directives = ["no_null_override", "append"]
//! ```

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::{Directive, MergeOptions};
use crate::result_ext::ConfigResultExt;
use crate::{ConfigError, FunctionError};

/// Default configuration file name, resolved against the working directory.
pub const CONFIG_FILE_NAME: &str = "deepmerge.toml";

/// Prefix of environment variables read by [`ProviderConfig::load`].
pub const ENV_PREFIX: &str = "DEEPMERGE_";

/// Behaviour when a call supplies no data maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Return an empty mapping.
    #[default]
    EmptyMap,
    /// Fail with "at least one map must be provided".
    Reject,
}

impl EmptyInputPolicy {
    /// Apply the policy to an empty set of maps.
    ///
    /// # Errors
    ///
    /// Returns the call-level empty-input error under [`EmptyInputPolicy::Reject`].
    pub fn check(self, map_count: usize) -> Result<(), FunctionError> {
        match self {
            Self::Reject if map_count == 0 => Err(FunctionError::empty_input()),
            Self::Reject | Self::EmptyMap => Ok(()),
        }
    }
}

/// Validated provider configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Behaviour when no data maps are supplied.
    pub empty_input: EmptyInputPolicy,
    /// Directives applied before those passed in a call.
    pub default_directives: Vec<String>,
}

impl ProviderConfig {
    /// Load from `deepmerge.toml` in the working directory and the environment.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a default directive is
    /// not recognised.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Utf8Path::new(CONFIG_FILE_NAME))
    }

    /// Load from `path` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a default directive is
    /// not recognised.
    pub fn load_from(path: &Utf8Path) -> Result<Self, ConfigError> {
        debug!(%path, "loading provider configuration");
        Self::from_figment(&Self::figment(path))
    }

    /// Layered providers used by [`ProviderConfig::load_from`].
    #[must_use]
    pub fn figment(path: &Utf8Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_std_path()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extract and validate a configuration from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a default directive is
    /// not recognised.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().into_config()?;
        config.directives()?;
        Ok(config)
    }

    /// Parse the configured default directives.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDirective`] for the first entry that is
    /// not a recognised directive.
    pub fn directives(&self) -> Result<Vec<Directive>, ConfigError> {
        self.default_directives
            .iter()
            .map(|option| {
                option
                    .parse()
                    .map_err(|_| ConfigError::InvalidDirective {
                        option: option.clone(),
                    })
            })
            .collect()
    }

    /// Merge options every call starts from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDirective`] when a default directive is
    /// not recognised.
    pub fn base_options(&self) -> Result<MergeOptions, ConfigError> {
        Ok(MergeOptions::from_directives(self.directives()?))
    }
}
