//! Editor for a field holding one alternative per writing system.
//!
//! Alternatives are kept in the order of the field's `WritingSystemSet` and
//! fitted to the row height like list items. ArrowDown/ArrowUp move the caret
//! between alternatives through the `SelectionNavigator`.

use std::sync::Arc;

use polytext_config::{Config, ConfigError, WritingSystemSet, defaults};
use polytext_fonts::{FontMetricsProvider, RichString, StyleResolver};
use winit::keyboard::{Key, NamedKey};

use crate::error::EditorError;
use crate::fitting::TextFitter;
use crate::navigator::{CaretPlacement, Direction, EditorSelection, FieldId, SelectionNavigator};

/// One multi-string field.
pub struct MultiStringEditor {
    field: FieldId,
    writing_systems: WritingSystemSet,
    alternatives: Vec<Arc<RichString>>,
    style: String,
    fitter: TextFitter,
}

impl MultiStringEditor {
    /// Editor with an empty alternative for every writing system.
    pub fn new(
        field: FieldId,
        writing_systems: WritingSystemSet,
        style: impl Into<String>,
        fitter: TextFitter,
    ) -> Self {
        let style = style.into();
        let alternatives = writing_systems
            .iter()
            .map(|ws| Arc::new(RichString::plain("", ws, style.as_str())))
            .collect();
        Self {
            field,
            writing_systems,
            alternatives,
            style,
            fitter,
        }
    }

    /// Editor over all configured writing systems, in the `Normal` style.
    pub fn from_config(
        field: FieldId,
        config: &Config,
        metrics: Arc<dyn FontMetricsProvider>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            field,
            config.writing_system_set()?,
            defaults::NORMAL_STYLE,
            TextFitter::from_config(config, metrics),
        ))
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    pub fn writing_systems(&self) -> &WritingSystemSet {
        &self.writing_systems
    }

    pub fn navigator(&self) -> SelectionNavigator<'_> {
        SelectionNavigator::new(&self.writing_systems)
    }

    fn index_of(&self, writing_system: &str) -> Result<usize, EditorError> {
        self.writing_systems
            .index_of(writing_system)
            .ok_or_else(|| EditorError::UnknownWritingSystem(writing_system.to_string()))
    }

    pub fn alternative(&self, writing_system: &str) -> Result<&Arc<RichString>, EditorError> {
        let index = self.index_of(writing_system)?;
        Ok(&self.alternatives[index])
    }

    /// Alternatives paired with their writing-system labels, in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &Arc<RichString>)> + '_ {
        (0..self.writing_systems.len()).filter_map(move |i| {
            Some((self.writing_systems.label(i)?, self.alternatives.get(i)?))
        })
    }

    /// Replace an alternative; the value is fitted before it is stored.
    pub fn set_alternative(
        &mut self,
        writing_system: &str,
        value: RichString,
    ) -> Result<(), EditorError> {
        let index = self.index_of(writing_system)?;
        self.alternatives[index] = self.fitter.fit(&Arc::new(value));
        Ok(())
    }

    /// Replace an alternative with plain text in the field's style.
    pub fn set_alternative_text(
        &mut self,
        writing_system: &str,
        text: &str,
    ) -> Result<(), EditorError> {
        let value = RichString::plain(text, writing_system, self.style.as_str());
        self.set_alternative(writing_system, value)
    }

    /// Use a resolver for a new stylesheet and refit every alternative.
    pub fn set_style_resolver(&mut self, resolver: Box<dyn StyleResolver>) {
        self.fitter.set_resolver(resolver);
        self.alternatives = self
            .alternatives
            .iter()
            .map(|alt| self.fitter.refit(alt))
            .collect();
    }

    /// Caret move for `key` from `selection`, if any.
    ///
    /// Selections in other fields and keys other than the vertical arrows
    /// leave the caret alone.
    pub fn handle_key(&self, key: &Key, selection: &EditorSelection) -> Option<CaretPlacement> {
        if selection.field != self.field {
            return None;
        }
        let direction = match key {
            Key::Named(NamedKey::ArrowDown) => Direction::Next,
            Key::Named(NamedKey::ArrowUp) => Direction::Previous,
            _ => return None,
        };
        self.navigator().navigate(selection, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polytext_fonts::{FontError, FontMetrics, FontStyle};

    struct FourThirds;

    impl FontMetricsProvider for FourThirds {
        fn metrics(&self, _: &str, _: u32, _: FontStyle) -> Result<FontMetrics, FontError> {
            Ok(FontMetrics {
                cell_ascent: 3,
                cell_descent: 1,
                em_height: 3,
            })
        }
    }

    fn editor() -> MultiStringEditor {
        let config = Config::from_yaml_str(
            r#"
writing_systems:
  - { id: en, abbreviation: Eng }
  - { id: fr }
  - { id: grc, abbreviation: Grk }
controls:
  max_item_height_mp: 12000
"#,
        )
        .unwrap();
        MultiStringEditor::from_config(FieldId(3), &config, Arc::new(FourThirds)).unwrap()
    }

    #[test]
    fn test_alternatives_follow_set_order() {
        let editor = editor();
        let labels: Vec<&str> = editor.rows().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Eng", "fr", "Grk"]);
        assert!(editor.rows().all(|(_, alt)| alt.text().is_empty()));
    }

    #[test]
    fn test_set_alternative_fits() {
        let mut editor = editor();
        editor.set_alternative_text("grc", "λόγος").unwrap();
        let alt = editor.alternative("grc").unwrap();
        assert_eq!(alt.text(), "λόγος");
        assert_eq!(alt.runs()[0].explicit_size_mp(), Some(9_000));
    }

    #[test]
    fn test_unknown_writing_system() {
        let mut editor = editor();
        assert_eq!(
            editor.set_alternative_text("de", "Wort"),
            Err(EditorError::UnknownWritingSystem("de".to_string()))
        );
        assert!(editor.alternative("de").is_err());
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let editor = editor();
        let down = Key::Named(NamedKey::ArrowDown);
        let up = Key::Named(NamedKey::ArrowUp);
        let at_en = EditorSelection::new(FieldId(3), "en");
        assert_eq!(
            editor.handle_key(&down, &at_en).map(|p| p.writing_system_index),
            Some(1)
        );
        assert_eq!(editor.handle_key(&up, &at_en), None);
        let at_grc = EditorSelection::new(FieldId(3), "grc");
        assert_eq!(editor.handle_key(&down, &at_grc), None);
    }

    #[test]
    fn test_other_field_is_ignored() {
        let editor = editor();
        let elsewhere = EditorSelection::new(FieldId(4), "en");
        assert_eq!(
            editor.handle_key(&Key::Named(NamedKey::ArrowDown), &elsewhere),
            None
        );
    }
}
