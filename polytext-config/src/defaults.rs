//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields and by the `Default` impls.

use std::collections::BTreeMap;

use crate::types::{StyleDef, WritingSystemDef};

/// Name of the style every stylesheet is expected to carry.
pub const NORMAL_STYLE: &str = "Normal";

pub fn font_size_mp() -> u32 {
    12_000 // 12pt
}

pub fn font_face() -> String {
    "Charis SIL".to_string()
}

pub fn writing_systems() -> Vec<WritingSystemDef> {
    vec![WritingSystemDef {
        id: "en".to_string(),
        abbreviation: "Eng".to_string(),
        default_font: font_face(),
        default_size_mp: font_size_mp(),
        right_to_left: false,
    }]
}

pub fn fallback_writing_system() -> String {
    "en".to_string()
}

pub fn styles() -> BTreeMap<String, StyleDef> {
    let mut styles = BTreeMap::new();
    styles.insert(
        NORMAL_STYLE.to_string(),
        StyleDef {
            size_mp: Some(font_size_mp()),
            ..StyleDef::default()
        },
    );
    styles
}

pub fn show_highlight() -> bool {
    true
}

pub fn metrics_cache_size() -> usize {
    64 // (face, bold, italic) entries
}
