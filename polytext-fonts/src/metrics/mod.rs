//! Font metrics seam.
//!
//! Heights are derived from three design-unit quantities (cell ascent, cell
//! descent, em height) and compared in millipoints so all arithmetic stays in
//! integers.

mod system;

use thiserror::Error;

use crate::resolver::FontStyle;

pub use system::SystemFontMetrics;

/// Vertical metrics of a face, in font design units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontMetrics {
    pub cell_ascent: u32,
    pub cell_descent: u32,
    pub em_height: u32,
}

impl FontMetrics {
    /// Rendered line height in millipoints at `size_mp`.
    ///
    /// `size * (ascent + descent) / em`, truncated. A zero em height yields
    /// `u32::MAX` so such a face never counts as fitting.
    pub fn height_mp(&self, size_mp: u32) -> u32 {
        let cell = u64::from(self.cell_ascent) + u64::from(self.cell_descent);
        (u64::from(size_mp) * cell)
            .checked_div(u64::from(self.em_height))
            .map_or(u32::MAX, |h| u32::try_from(h).unwrap_or(u32::MAX))
    }
}

/// Errors from a metrics provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("font face '{0}' not found")]
    FaceNotFound(String),
    #[error("font data for '{0}' could not be parsed")]
    InvalidFontData(String),
    #[error("font '{0}' reports a zero em height")]
    InvalidMetrics(String),
}

/// Supplies vertical metrics for a face at a size.
///
/// Size is passed because hinted metrics need not scale linearly.
pub trait FontMetricsProvider {
    fn metrics(&self, face: &str, size_mp: u32, style: FontStyle)
    -> Result<FontMetrics, FontError>;

    /// Drop cached results; called when the stylesheet changes.
    fn invalidate(&self) {}
}

impl<T: FontMetricsProvider + ?Sized> FontMetricsProvider for &T {
    fn metrics(
        &self,
        face: &str,
        size_mp: u32,
        style: FontStyle,
    ) -> Result<FontMetrics, FontError> {
        (**self).metrics(face, size_mp, style)
    }

    fn invalidate(&self) {
        (**self).invalidate();
    }
}

impl<T: FontMetricsProvider + ?Sized> FontMetricsProvider for std::sync::Arc<T> {
    fn metrics(
        &self,
        face: &str,
        size_mp: u32,
        style: FontStyle,
    ) -> Result<FontMetrics, FontError> {
        (**self).metrics(face, size_mp, style)
    }

    fn invalidate(&self) {
        (**self).invalidate();
    }
}
