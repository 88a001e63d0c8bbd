//! Highlight/selection state of a custom-drawn list.
//!
//! The highlighted row is the transient cursor moved by arrows, typing and
//! the pointer; the selected row is the committed choice. Item count is
//! passed in on every operation because the backing list can change between
//! events. Indices are never trusted past the current bound.

use winit::dpi::PhysicalPosition;

use crate::hit_test::{HitTester, Viewport};

/// Notification raised by [`HighlightModel::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The committed row is the one already selected (or nothing was highlighted).
    SameItemReselected,
    /// The selection moved to this row.
    SelectionChanged(usize),
}

/// Dual cursor over a list: highlighted row and selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightModel {
    highlighted: Option<usize>,
    selected: Option<usize>,
    /// Whether the highlighted row is drawn
    pub show_highlight: bool,
}

impl Default for HighlightModel {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HighlightModel {
    /// Nothing highlighted, nothing selected.
    pub fn new(show_highlight: bool) -> Self {
        Self {
            highlighted: None,
            selected: None,
            show_highlight,
        }
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Row to draw highlighted, if any.
    pub fn visible_highlight(&self) -> Option<usize> {
        self.highlighted.filter(|_| self.show_highlight)
    }

    /// Forget indices that no longer exist after the list shrank.
    ///
    /// A stale highlight moves to the last row; a stale selection is dropped.
    pub fn clamp_to(&mut self, item_count: usize) {
        if self.highlighted.is_some_and(|h| h >= item_count) {
            self.highlighted = item_count.checked_sub(1);
        }
        if self.selected.is_some_and(|s| s >= item_count) {
            self.selected = None;
        }
    }

    /// Keep both cursors on the same items after row `index` was removed.
    ///
    /// `item_count` is the count after removal. A removed selection is
    /// dropped; a removed highlight stays at the same position, clamped.
    pub fn item_removed(&mut self, index: usize, item_count: usize) {
        let shift = |i: usize| if i > index { i - 1 } else { i };
        self.selected = match self.selected {
            Some(s) if s == index => None,
            other => other.map(shift),
        };
        self.highlighted = self.highlighted.map(shift);
        self.clamp_to(item_count);
    }

    /// Highlight `index` if it is a valid row. Returns whether it was applied.
    pub fn highlight(&mut self, index: usize, item_count: usize) -> bool {
        if index < item_count {
            self.highlighted = Some(index);
            true
        } else {
            false
        }
    }

    /// Move the highlight one row down; stops at the last row. Nothing
    /// highlighted moves to row 0.
    pub fn move_highlight_down(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.clamp_to(item_count);
        match self.highlighted {
            None => self.highlighted = Some(0),
            Some(h) if h < item_count - 1 => self.highlighted = Some(h + 1),
            Some(_) => {}
        }
    }

    /// Move the highlight one row up; nothing highlighted lands on row 0.
    pub fn move_highlight_up(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.clamp_to(item_count);
        match self.highlighted {
            None => self.highlighted = Some(0),
            Some(h) if h > 0 => self.highlighted = Some(h - 1),
            Some(_) => {}
        }
    }

    /// Highlight the row under `point`.
    ///
    /// The hit-test result is only applied when it is inside the current
    /// item count; the list may have shrunk since the tester last saw it.
    pub fn mouse_highlight<H>(
        &mut self,
        point: PhysicalPosition<f64>,
        viewport: &Viewport,
        hit_tester: &H,
        item_count: usize,
    ) -> bool
    where
        H: HitTester + ?Sized,
    {
        match hit_tester.row_at(point, viewport) {
            Some(row) if row < item_count => {
                self.highlighted = Some(row);
                true
            }
            Some(row) => {
                log::debug!("Ignoring hit-test row {} beyond {} items", row, item_count);
                false
            }
            None => false,
        }
    }

    /// Confirm the highlighted row as the selection.
    pub fn commit(&mut self) -> SelectionEvent {
        match self.highlighted {
            Some(h) if self.selected != Some(h) => {
                self.selected = Some(h);
                SelectionEvent::SelectionChanged(h)
            }
            _ => SelectionEvent::SameItemReselected,
        }
    }

    /// Select `index` programmatically; the highlight follows.
    ///
    /// `None` clears both. Out-of-range indices are ignored.
    pub fn set_selected(&mut self, index: Option<usize>, item_count: usize) -> bool {
        match index {
            Some(i) if i >= item_count => false,
            _ => {
                self.selected = index;
                self.highlighted = index;
                true
            }
        }
    }
}
