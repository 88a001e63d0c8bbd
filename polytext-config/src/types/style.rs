//! Named style definitions and the font they resolve to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Font properties a style may override for one writing system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOverride {
    pub font_face: Option<String>,
    pub size_mp: Option<u32>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

/// A named style.
///
/// Unset properties come from the `inherit` parent, then from the writing
/// system's default font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDef {
    /// Name of the style this one is based on
    pub inherit: Option<String>,
    /// Font face name
    pub font_face: Option<String>,
    /// Size in millipoints (1/1000 pt)
    pub size_mp: Option<u32>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    /// Per-writing-system overrides, keyed by writing-system id
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, FontOverride>,
}

/// The font a (style, writing system) pair resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveFont {
    pub face: String,
    pub size_mp: u32,
    pub bold: bool,
    pub italic: bool,
}
