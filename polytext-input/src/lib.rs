//! Highlight/selection state and input routing for polytext list controls.
//!
//! Features:
//! - `HighlightModel`: highlighted vs. selected row, clamped navigation
//! - Hit-test seam with a uniform-row implementation
//! - Key routing for type-ahead, Enter/Tab commit, arrows and Escape
//! - Selection notification sinks

pub mod highlight;
pub mod hit_test;
pub mod items;
pub mod keys;
pub mod sink;

pub use highlight::{HighlightModel, SelectionEvent};
pub use hit_test::{HitTester, UniformRowHitTester, Viewport};
pub use items::{ItemLabels, find_string, find_string_exact};
pub use keys::{KeyOutcome, route_key};
pub use sink::{FnSink, NullSink, SelectionSink};
