//! Writing-system definitions and the ordered set a multi-string field uses.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A writing system (script/language variant) known to the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingSystemDef {
    /// Stable identifier, e.g. `en`, `grc`, `x-kal-Latn`
    pub id: String,
    /// Short label shown next to an alternative in the editor
    #[serde(default)]
    pub abbreviation: String,
    /// Font face used when a style does not name one
    #[serde(default = "crate::defaults::font_face")]
    pub default_font: String,
    /// Size in millipoints used when a style does not set one
    #[serde(default = "crate::defaults::font_size_mp")]
    pub default_size_mp: u32,
    /// Whether text in this writing system runs right to left.
    ///
    /// Not read by fitting or navigation; carried through for the host's
    /// layout engine.
    #[serde(default)]
    pub right_to_left: bool,
}

impl WritingSystemDef {
    /// Label for display: the abbreviation, or the id when none is set.
    pub fn label(&self) -> &str {
        if self.abbreviation.is_empty() {
            &self.id
        } else {
            &self.abbreviation
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Entry {
    id: String,
    label: String,
}

/// Ordered, immutable list of writing-system ids.
///
/// The position of an id is its navigation key; the set is fixed for the
/// lifetime of whatever control holds it. Cloning shares the underlying list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritingSystemSet {
    entries: Arc<[Entry]>,
}

impl WritingSystemSet {
    /// Build a set from ids, using each id as its own label.
    ///
    /// Empty or duplicate ids are rejected.
    pub fn new<I, S>(ids: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(ids.into_iter().map(|id| {
            let id = id.into();
            Entry {
                label: id.clone(),
                id,
            }
        }))
    }

    /// Build a set from writing-system definitions, keeping their order.
    pub fn from_defs(defs: &[WritingSystemDef]) -> Result<Self, ConfigError> {
        Self::from_entries(defs.iter().map(|def| Entry {
            id: def.id.clone(),
            label: def.label().to_string(),
        }))
    }

    fn from_entries(entries: impl Iterator<Item = Entry>) -> Result<Self, ConfigError> {
        let entries: Vec<Entry> = entries.collect();
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.id.is_empty() {
                return Err(ConfigError::Validation(
                    "writing system id must not be empty".to_string(),
                ));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate writing system '{}'",
                    entry.id
                )));
            }
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Number of writing systems in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.id.as_str())
    }

    /// Display label at `index`, if in range.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.label.as_str())
    }

    /// Position of `id` in the set.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Ids in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }
}
