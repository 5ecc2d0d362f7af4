//! Test helpers shared across crates in the deepmerge workspace.
//!
//! [`host`] builds host argument values from JSON fixtures and reads results
//! back as JSON. [`figment`] loads provider configuration inside a `figment::Jail`.

pub mod figment;
pub mod host;
