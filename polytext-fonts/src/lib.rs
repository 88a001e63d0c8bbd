//! Rich strings, font metrics and height fitting for polytext controls.
//!
//! This crate provides:
//! - The immutable `RichString` value type and its builder
//! - The `StyleResolver` seam from (style, writing system) to a font
//! - The `FontMetricsProvider` seam plus a fontdb/swash implementation
//! - Font height fitting (`adjust_to_height`) and its reset (`clear_explicit_size`)
//!
//! # Units
//!
//! Every size and height is in millipoints (1/1000 pt), stored as `u32`.

pub mod fitter;
pub mod metrics;
pub mod resolver;
pub mod rich_string;

// Re-export main types for convenience
pub use fitter::{
    FitError, SHRINK_STEP_MP, adjust_to_height, apply_floor, clear_explicit_size,
    fit_point_size, font_height_mp, rendered_height_mp,
};
pub use metrics::{FontError, FontMetrics, FontMetricsProvider, SystemFontMetrics};
pub use resolver::{FnResolver, FontStyle, ResolvedFont, StyleResolver};
pub use rich_string::{RichString, RichStringBuilder, Run, RunError, RunProps};
