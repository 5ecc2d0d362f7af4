//! Loading provider configuration inside a `figment::Jail`.
//!
//! A jail isolates the working directory and environment so configuration
//! files and `DEEPMERGE_` variables written by one test never leak into
//! another.

use anyhow::{Result, anyhow};
use camino::Utf8Path;
use deepmerge::{CONFIG_FILE_NAME, ConfigError, ProviderConfig};
use figment::Jail;

/// Run `setup` in a fresh jail, then load `deepmerge.toml` and the
/// environment it prepared.
///
/// The outer result reports jail failures; the inner one is the load
/// outcome under test.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or `setup` fails.
///
/// # Examples
///
/// ```
/// use deepmerge::EmptyInputPolicy;
/// use deepmerge_test_helpers::figment::load_config;
///
/// let config = load_config(|jail| {
///     jail.set_env("DEEPMERGE_EMPTY_INPUT", "reject");
///     Ok(())
/// })??;
/// assert_eq!(config.empty_input, EmptyInputPolicy::Reject);
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn load_config<F>(setup: F) -> Result<Result<ProviderConfig, ConfigError>>
where
    F: FnOnce(&mut Jail) -> figment::error::Result<()>,
{
    load_config_from(Utf8Path::new(CONFIG_FILE_NAME), setup)
}

/// Like [`load_config`], reading the file at `path` instead.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or `setup` fails.
pub fn load_config_from<F>(
    path: &Utf8Path,
    setup: F,
) -> Result<Result<ProviderConfig, ConfigError>>
where
    F: FnOnce(&mut Jail) -> figment::error::Result<()>,
{
    let mut outcome = None;
    Jail::try_with(|jail| {
        setup(jail)?;
        outcome = Some(ProviderConfig::load_from(path));
        Ok(())
    })
    .map_err(|err| anyhow!("jail setup failed: {err}"))?;
    outcome.ok_or_else(|| anyhow!("configuration was not loaded"))
}
