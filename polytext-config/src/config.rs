//! Top-level configuration: loading, saving and validation.
//!
//! Covers:
//! - `from_yaml_str` / `load_from` / `save_to` (YAML with atomic write)
//! - `validate` (writing systems, fallback, style inheritance)
//! - snapshots handed to controls (`writing_system_set`, `stylesheet`)

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, StyleError};
use crate::stylesheet::StyleSheet;
use crate::types::{ControlSettings, StyleDef, WritingSystemDef, WritingSystemSet};

/// Configuration for the polytext controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Writing systems in navigation order
    #[serde(default = "crate::defaults::writing_systems")]
    pub writing_systems: Vec<WritingSystemDef>,

    /// Writing system substituted when a run's own one cannot be resolved
    #[serde(default = "crate::defaults::fallback_writing_system")]
    pub fallback_writing_system: String,

    /// Named styles
    #[serde(default = "crate::defaults::styles")]
    pub styles: BTreeMap<String, StyleDef>,

    /// Control behaviour
    #[serde(default)]
    pub controls: ControlSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            writing_systems: crate::defaults::writing_systems(),
            fallback_writing_system: crate::defaults::fallback_writing_system(),
            styles: crate::defaults::styles(),
            controls: ControlSettings::default(),
        }
    }
}

impl Config {
    /// Parse and validate configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or the defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config = Self::from_yaml_str(&contents)?;
        log::info!(
            "Loaded {} writing systems and {} styles",
            config.writing_systems.len(),
            config.styles.len()
        );
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.writing_systems.is_empty() {
            return Err(ConfigError::Validation(
                "at least one writing system is required".to_string(),
            ));
        }
        let set = self.writing_system_set()?;

        if !set.contains(&self.fallback_writing_system) {
            return Err(ConfigError::Validation(format!(
                "fallback_writing_system '{}' is not a configured writing system",
                self.fallback_writing_system
            )));
        }

        for ws in &self.writing_systems {
            if ws.default_size_mp == 0 {
                return Err(ConfigError::Validation(format!(
                    "writing system '{}' has a zero default_size_mp",
                    ws.id
                )));
            }
        }

        let known: HashSet<&str> = self.styles.keys().map(String::as_str).collect();
        for (name, style) in &self.styles {
            if let Some(parent) = style.inherit.as_deref()
                && !known.contains(parent)
            {
                return Err(ConfigError::Validation(format!(
                    "style '{name}' inherits from unknown style '{parent}'"
                )));
            }
            if style.size_mp == Some(0) {
                return Err(ConfigError::Validation(format!(
                    "style '{name}' has a zero size_mp"
                )));
            }
        }

        let sheet = self.stylesheet();
        for name in self.styles.keys() {
            if let Err(StyleError::InheritanceCycle(at)) =
                sheet.effective_font(name, &self.fallback_writing_system)
            {
                return Err(ConfigError::Validation(format!(
                    "style '{name}' has an inheritance cycle through '{at}'"
                )));
            }
        }

        if self.controls.metrics_cache_size == 0 {
            return Err(ConfigError::Validation(
                "controls.metrics_cache_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured writing systems as an ordered set.
    pub fn writing_system_set(&self) -> Result<WritingSystemSet, ConfigError> {
        WritingSystemSet::from_defs(&self.writing_systems)
    }

    /// Snapshot of the stylesheet for handing to controls.
    pub fn stylesheet(&self) -> StyleSheet {
        StyleSheet::new(self.styles.clone(), &self.writing_systems)
    }
}
