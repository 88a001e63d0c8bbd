//! Read-only stylesheet snapshot.
//!
//! A `StyleSheet` maps a style name plus a writing-system id to the font that
//! text in that style and writing system is drawn with. Property lookup walks
//! the style's `inherit` chain from most derived to base; at each level a
//! per-writing-system override wins over the style's own value. Anything
//! still unset comes from the writing system's default font.

use std::collections::BTreeMap;

use crate::error::StyleError;
use crate::types::{EffectiveFont, StyleDef, WritingSystemDef};

/// Immutable snapshot of styles and writing-system defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    styles: BTreeMap<String, StyleDef>,
    writing_systems: BTreeMap<String, WritingSystemDef>,
}

impl StyleSheet {
    pub fn new(styles: BTreeMap<String, StyleDef>, writing_systems: &[WritingSystemDef]) -> Self {
        Self {
            styles,
            writing_systems: writing_systems
                .iter()
                .map(|ws| (ws.id.clone(), ws.clone()))
                .collect(),
        }
    }

    pub fn style(&self, name: &str) -> Option<&StyleDef> {
        self.styles.get(name)
    }

    pub fn writing_system(&self, id: &str) -> Option<&WritingSystemDef> {
        self.writing_systems.get(id)
    }

    /// Style names in sorted order.
    pub fn style_names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Resolve the font used for `style` in writing system `ws`.
    pub fn effective_font(&self, style: &str, ws: &str) -> Result<EffectiveFont, StyleError> {
        let ws_def = self
            .writing_systems
            .get(ws)
            .ok_or_else(|| StyleError::UnknownWritingSystem(ws.to_string()))?;

        let mut face: Option<&str> = None;
        let mut size_mp = None;
        let mut bold = None;
        let mut italic = None;

        let mut visited: Vec<&str> = Vec::new();
        let mut current = Some(style);
        while let Some(name) = current {
            if visited.contains(&name) {
                return Err(StyleError::InheritanceCycle(name.to_string()));
            }
            visited.push(name);

            let def = self
                .styles
                .get(name)
                .ok_or_else(|| StyleError::UnknownStyle(name.to_string()))?;

            if let Some(ov) = def.overrides.get(ws) {
                face = face.or(ov.font_face.as_deref());
                size_mp = size_mp.or(ov.size_mp);
                bold = bold.or(ov.bold);
                italic = italic.or(ov.italic);
            }
            face = face.or(def.font_face.as_deref());
            size_mp = size_mp.or(def.size_mp);
            bold = bold.or(def.bold);
            italic = italic.or(def.italic);

            current = def.inherit.as_deref();
        }

        Ok(EffectiveFont {
            face: face.unwrap_or(&ws_def.default_font).to_string(),
            size_mp: size_mp.unwrap_or(ws_def.default_size_mp),
            bold: bold.unwrap_or(false),
            italic: italic.unwrap_or(false),
        })
    }
}
