//! Multi-writing-system text controls.
//!
//! - `RichComboListBox`: list/combo box of rich strings fitted to a row height,
//!   with highlight-vs-selection tracking and type-ahead
//! - `MultiStringEditor`: one field with an alternative per writing system
//! - `SelectionNavigator`: caret moves between those alternatives
//!
//! Configuration lives in `polytext-config`, font metrics and height fitting
//! in `polytext-fonts`, and input state in `polytext-input`. Rendering and
//! layout belong to the host's engine.

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod combo_list;
pub mod error;
pub mod fitting;
pub mod multi_string;
pub mod navigator;

pub use combo_list::{ItemList, RichComboListBox};
pub use error::EditorError;
pub use fitting::TextFitter;
pub use multi_string::MultiStringEditor;
pub use navigator::{CaretPlacement, Direction, EditorSelection, FieldId, SelectionNavigator};

pub use polytext_config::{Config, ConfigError, WritingSystemSet};
pub use polytext_fonts::{RichString, RichStringBuilder, RunProps};
pub use polytext_input::{HighlightModel, SelectionEvent, SelectionSink};
