//! Configuration types.
//!
//! Split into focused sub-modules by domain:
//! - `writing_system`: writing-system definitions and the ordered `WritingSystemSet`
//! - `style`: named styles, per-writing-system overrides, resolved fonts
//! - `controls`: settings for the list/combo and editor controls

pub mod controls;
pub mod style;
pub mod writing_system;

pub use controls::ControlSettings;
pub use style::{EffectiveFont, FontOverride, StyleDef};
pub use writing_system::{WritingSystemDef, WritingSystemSet};
