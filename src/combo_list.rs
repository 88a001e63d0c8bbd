//! List/combo box whose items are rich strings.
//!
//! The control keeps its items fitted to the configured row height, tracks
//! highlight vs. selection with a `HighlightModel`, and forwards commit
//! notifications to its `SelectionSink`. Painting and hit testing belong to
//! the rendering engine; the control only receives their results.

use std::sync::Arc;

use polytext_config::{Config, ControlSettings};
use polytext_fonts::{FontMetricsProvider, RichString, StyleResolver};
use polytext_input::{
    HighlightModel, HitTester, ItemLabels, SelectionEvent, SelectionSink, Viewport, route_key,
};
use winit::dpi::PhysicalPosition;
use winit::keyboard::{Key, ModifiersState};

use crate::fitting::TextFitter;

/// Items of a list, labelled by their plain text.
#[derive(Debug, Clone, Default)]
pub struct ItemList(Vec<Arc<RichString>>);

impl ItemList {
    pub fn as_slice(&self) -> &[Arc<RichString>] {
        &self.0
    }
}

impl ItemLabels for ItemList {
    fn item_count(&self) -> usize {
        self.0.len()
    }

    fn item_label(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|item| item.text())
    }
}

/// A combo box with a drop-down list of rich-string items.
pub struct RichComboListBox {
    items: ItemList,
    model: HighlightModel,
    popup_open: bool,
    fitter: TextFitter,
    sink: Box<dyn SelectionSink>,
}

impl RichComboListBox {
    pub fn new(fitter: TextFitter, settings: &ControlSettings, sink: Box<dyn SelectionSink>) -> Self {
        Self {
            items: ItemList::default(),
            model: HighlightModel::new(settings.show_highlight),
            popup_open: false,
            fitter,
            sink,
        }
    }

    /// Control configured from `config`, resolving styles against its stylesheet.
    pub fn from_config(
        config: &Config,
        metrics: Arc<dyn FontMetricsProvider>,
        sink: Box<dyn SelectionSink>,
    ) -> Self {
        Self::new(
            TextFitter::from_config(config, metrics),
            &config.controls,
            sink,
        )
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Append an item, fitted to the row height. Returns its index.
    pub fn add_item(&mut self, item: RichString) -> usize {
        let fitted = self.fitter.fit(&Arc::new(item));
        self.items.0.push(fitted);
        self.items.0.len() - 1
    }

    /// Replace every item; highlight and selection are reset.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = RichString>) {
        self.items.0 = items
            .into_iter()
            .map(|item| self.fitter.fit(&Arc::new(item)))
            .collect();
        self.model = HighlightModel::new(self.model.show_highlight);
        log::debug!("Combo list now holds {} items", self.items.0.len());
    }

    /// Remove the item at `index`, keeping highlight and selection on their items.
    pub fn remove_item(&mut self, index: usize) -> Option<Arc<RichString>> {
        if index >= self.items.0.len() {
            return None;
        }
        let removed = self.items.0.remove(index);
        self.model.item_removed(index, self.items.0.len());
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.0.clear();
        self.model.clamp_to(0);
    }

    pub fn items(&self) -> &[Arc<RichString>] {
        self.items.as_slice()
    }

    pub fn item(&self, index: usize) -> Option<&Arc<RichString>> {
        self.items.0.get(index)
    }

    pub fn item_count(&self) -> usize {
        self.items.0.len()
    }

    /// Height of item `index` as drawn, in millipoints.
    pub fn item_height_mp(&self, index: usize) -> Option<u32> {
        self.fitter.rendered_height_mp(self.items.0.get(index)?)
    }

    pub fn find_string(&self, prefix: &str) -> Option<usize> {
        polytext_input::find_string(&self.items, prefix)
    }

    pub fn find_string_exact(&self, text: &str) -> Option<usize> {
        polytext_input::find_string_exact(&self.items, text)
    }

    // ========================================================================
    // Styling
    // ========================================================================

    /// Use a resolver for a new stylesheet and refit every item.
    pub fn set_style_resolver(&mut self, resolver: Box<dyn StyleResolver>) {
        self.fitter.set_resolver(resolver);
        self.refit_items();
    }

    /// Change the row height budget (0 for none) and refit every item.
    pub fn set_max_item_height(&mut self, max_height_mp: u32) {
        self.fitter.set_max_height(max_height_mp);
        self.refit_items();
    }

    fn refit_items(&mut self) {
        self.items.0 = self
            .items
            .0
            .iter()
            .map(|item| self.fitter.refit(item))
            .collect();
    }

    // ========================================================================
    // Popup
    // ========================================================================

    /// Show the drop-down; the highlight starts on the selected item.
    pub fn open_popup(&mut self) {
        let selected = self.model.selected_index();
        self.model.set_selected(selected, self.items.0.len());
        self.popup_open = true;
    }

    pub fn close_popup(&mut self) {
        self.popup_open = false;
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn highlighted_index(&self) -> Option<usize> {
        self.model.highlighted_index()
    }

    /// Row the renderer should draw highlighted.
    pub fn visible_highlight(&self) -> Option<usize> {
        self.model.visible_highlight()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.model.selected_index()
    }

    pub fn selected_item(&self) -> Option<&Arc<RichString>> {
        self.items.0.get(self.model.selected_index()?)
    }

    /// Select programmatically. No notification is raised.
    pub fn set_selected_index(&mut self, index: Option<usize>) -> bool {
        self.model.set_selected(index, self.items.0.len())
    }

    fn notify(&mut self, event: SelectionEvent) {
        log::debug!("Combo list commit: {:?}", event);
        self.sink.notify(event);
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Route a key press. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &Key, modifiers: ModifiersState) -> bool {
        let outcome = route_key(&mut self.model, key, modifiers, &self.items);
        if outcome.close_popup {
            self.popup_open = false;
        }
        if let Some(event) = outcome.event {
            self.notify(event);
        }
        outcome.handled
    }

    /// Track the pointer over the list.
    pub fn handle_mouse_move<H>(
        &mut self,
        point: PhysicalPosition<f64>,
        viewport: &Viewport,
        hit_tester: &H,
    ) -> bool
    where
        H: HitTester + ?Sized,
    {
        let count = self.items.0.len();
        self.model.mouse_highlight(point, viewport, hit_tester, count)
    }

    /// Click on the list: highlight the row under the pointer and commit it.
    pub fn handle_click<H>(
        &mut self,
        point: PhysicalPosition<f64>,
        viewport: &Viewport,
        hit_tester: &H,
    ) -> Option<SelectionEvent>
    where
        H: HitTester + ?Sized,
    {
        if !self.handle_mouse_move(point, viewport, hit_tester) {
            return None;
        }
        let event = self.model.commit();
        self.popup_open = false;
        self.notify(event);
        Some(event)
    }
}
