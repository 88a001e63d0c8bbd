//! Shared integration test helpers for polytext.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` suppresses warnings when a file uses only some
//! helpers.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use polytext::{Config, SelectionEvent};
use polytext_fonts::{FontError, FontMetrics, FontMetricsProvider, FontStyle};
use polytext_input::FnSink;
use tempfile::TempDir;

/// Config used across the suite:
///
/// - `en`, `fr` in Charis SIL at 12pt
/// - `grc` in Gentium at 14pt
/// - `xx` in a face the fake metrics cannot find
/// - 12pt row budget
pub const SAMPLE_YAML: &str = r#"
writing_systems:
  - { id: en, abbreviation: Eng, default_font: Charis SIL, default_size_mp: 12000 }
  - { id: fr, abbreviation: Fre, default_font: Charis SIL, default_size_mp: 12000 }
  - { id: grc, abbreviation: Grk, default_font: Gentium, default_size_mp: 14000 }
  - { id: xx, default_font: Missing, default_size_mp: 12000 }
fallback_writing_system: en
styles:
  Normal: {}
  Emphasis:
    inherit: Normal
    italic: true
controls:
  max_item_height_mp: 12000
"#;

/// Writes `SAMPLE_YAML` into a temp dir and loads it back.
///
/// The `TempDir` must outlive any further config I/O in the test.
pub fn sample_config() -> (Config, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = config_path(&dir);
    fs::write(&path, SAMPLE_YAML).expect("Failed to write config");
    let config = Config::load_from(&path).expect("Failed to load sample config");
    (config, dir)
}

pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("polytext.yaml")
}

/// Metrics where line height is 4/3 of the em, so 12pt needs 16pt of height.
///
/// The face `Missing` is never found.
pub struct FakeMetrics;

impl FontMetricsProvider for FakeMetrics {
    fn metrics(&self, face: &str, _size_mp: u32, _style: FontStyle) -> Result<FontMetrics, FontError> {
        if face == "Missing" {
            return Err(FontError::FaceNotFound(face.to_string()));
        }
        Ok(FontMetrics {
            cell_ascent: 3,
            cell_descent: 1,
            em_height: 3,
        })
    }
}

/// Sink that records events into a shared vector.
pub fn recording_sink() -> (
    Box<FnSink<impl FnMut(SelectionEvent)>>,
    Rc<RefCell<Vec<SelectionEvent>>>,
) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink_events = Rc::clone(&events);
    (
        Box::new(FnSink(move |event| sink_events.borrow_mut().push(event))),
        events,
    )
}
