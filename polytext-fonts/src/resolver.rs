//! Style resolution seam.
//!
//! Fitting never looks at a stylesheet directly: it asks a `StyleResolver`
//! which face and size a (style, writing system) pair maps to. Controls are
//! constructed with an explicit resolver.

use polytext_config::{StyleError, StyleSheet};

/// Weight/slant flags passed to the metrics provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
}

/// Font a run is drawn with before any fitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFont {
    /// Face name
    pub face: String,
    /// Natural size in millipoints
    pub size_mp: u32,
    pub style: FontStyle,
}

/// Maps a named style in a writing system to its effective font.
///
/// Must be deterministic for a fixed stylesheet snapshot.
pub trait StyleResolver {
    fn resolve(&self, style: &str, writing_system: &str) -> Result<ResolvedFont, StyleError>;
}

impl StyleResolver for StyleSheet {
    fn resolve(&self, style: &str, writing_system: &str) -> Result<ResolvedFont, StyleError> {
        let font = self.effective_font(style, writing_system)?;
        Ok(ResolvedFont {
            face: font.face,
            size_mp: font.size_mp,
            style: FontStyle {
                bold: font.bold,
                italic: font.italic,
            },
        })
    }
}

impl<T: StyleResolver + ?Sized> StyleResolver for &T {
    fn resolve(&self, style: &str, writing_system: &str) -> Result<ResolvedFont, StyleError> {
        (**self).resolve(style, writing_system)
    }
}

impl<T: StyleResolver + ?Sized> StyleResolver for Box<T> {
    fn resolve(&self, style: &str, writing_system: &str) -> Result<ResolvedFont, StyleError> {
        (**self).resolve(style, writing_system)
    }
}

/// Adapts a closure into a `StyleResolver`.
pub struct FnResolver<F>(pub F);

impl<F> StyleResolver for FnResolver<F>
where
    F: Fn(&str, &str) -> Result<ResolvedFont, StyleError>,
{
    fn resolve(&self, style: &str, writing_system: &str) -> Result<ResolvedFont, StyleError> {
        (self.0)(style, writing_system)
    }
}
