//! Registry of the functions offered to the host.

use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::function::{Function, MergoFunction};
use crate::ConfigError;

/// Type name the host uses to address this provider.
pub const PROVIDER_NAME: &str = "deepmerge";

/// Identity reported to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderMetadata {
    /// Provider type name.
    pub type_name: &'static str,
    /// Release version, `dev` for local builds or `test` under acceptance tests.
    pub version: String,
}

/// Provider exposing the deep-merge functions.
#[derive(Clone)]
pub struct DeepmergeProvider {
    version: String,
    functions: Vec<Arc<dyn Function>>,
}

impl DeepmergeProvider {
    /// Build a provider with default configuration.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self::from_mergo(version.into(), MergoFunction::default())
    }

    /// Build a provider from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration is invalid.
    pub fn with_config(
        version: impl Into<String>,
        config: ProviderConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_mergo(version.into(), MergoFunction::new(config)?))
    }

    fn from_mergo(version: String, mergo: MergoFunction) -> Self {
        Self {
            version,
            functions: vec![Arc::new(mergo)],
        }
    }

    /// Provider identity.
    #[must_use]
    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_NAME,
            version: self.version.clone(),
        }
    }

    /// All registered functions.
    #[must_use]
    pub fn functions(&self) -> &[Arc<dyn Function>] {
        &self.functions
    }

    /// Look up a function by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Arc<dyn Function>> {
        self.functions
            .iter()
            .find(|function| function.metadata().name == name)
            .cloned()
    }
}

impl std::fmt::Debug for DeepmergeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self
            .functions
            .iter()
            .map(|function| function.metadata().name)
            .collect();
        f.debug_struct("DeepmergeProvider")
            .field("version", &self.version)
            .field("functions", &names)
            .finish()
    }
}
