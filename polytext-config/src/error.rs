//! Typed error variants for the polytext-config crate.
//!
//! `ConfigError` covers config I/O and validation; `StyleError` covers
//! stylesheet lookups. Both are plain `std::error::Error` types so callers
//! that work in `anyhow` can downcast to them.
//!
//! # Example
//!
//! ```rust,no_run
//! use polytext_config::ConfigError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading, saving or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Errors produced while resolving a named style for a writing system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// No style with this name exists in the stylesheet.
    #[error("unknown style '{0}'")]
    UnknownStyle(String),

    /// The writing system has no definition, so no default font exists for it.
    #[error("unknown writing system '{0}'")]
    UnknownWritingSystem(String),

    /// Following `inherit` links from this style leads back to itself.
    #[error("style inheritance cycle through '{0}'")]
    InheritanceCycle(String),
}
