//! Configuration system for the polytext controls.
//!
//! This crate provides:
//!
//! - Writing-system definitions and the ordered `WritingSystemSet`
//! - Named styles with inheritance and per-writing-system overrides
//! - The read-only `StyleSheet` snapshot controls resolve fonts against
//! - Control settings (height budget, minimum size, highlight display)
//! - YAML loading/saving with typed `ConfigError` values

pub mod config;
pub mod defaults;
pub mod error;
pub mod stylesheet;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::{ConfigError, StyleError};
pub use stylesheet::StyleSheet;
pub use types::{
    ControlSettings, EffectiveFont, FontOverride, StyleDef, WritingSystemDef, WritingSystemSet,
};
