//! Errors surfaced by the controls.

use thiserror::Error;

/// Errors from `MultiStringEditor` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The writing system is not one of the field's alternatives.
    #[error("writing system '{0}' is not part of this field")]
    UnknownWritingSystem(String),
}
