//! Integration tests for the highlight/selection state machine.
//!
//! These exercise `HighlightModel` and key routing through the public API
//! only; no window or event loop is involved.

use polytext_input::{
    HighlightModel, HitTester, SelectionEvent, SelectionSink, UniformRowHitTester, Viewport,
    route_key,
};
use winit::dpi::PhysicalPosition;
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// A hit tester that reports a fixed row, as a stale engine might.
struct FixedRow(usize);

impl HitTester for FixedRow {
    fn row_at(&self, _: PhysicalPosition<f64>, _: &Viewport) -> Option<usize> {
        Some(self.0)
    }
}

#[test]
fn scenario_up_down_commit() {
    let mut model = HighlightModel::default();
    model.move_highlight_up(5);
    assert_eq!(model.highlighted_index(), Some(0));
    for _ in 0..3 {
        model.move_highlight_down(5);
    }
    assert_eq!(model.highlighted_index(), Some(3));
    assert_eq!(model.commit(), SelectionEvent::SelectionChanged(3));
}

#[test]
fn down_never_exceeds_last_index() {
    for item_count in 1..8 {
        let mut model = HighlightModel::default();
        model.highlight(0, item_count);
        for _ in 0..item_count {
            model.move_highlight_down(item_count);
            assert!(model.highlighted_index().unwrap() <= item_count - 1);
        }
        assert_eq!(model.highlighted_index(), Some(item_count - 1));
    }
}

#[test]
fn up_never_goes_below_zero() {
    let mut model = HighlightModel::default();
    model.highlight(2, 4);
    for _ in 0..10 {
        model.move_highlight_up(4);
    }
    assert_eq!(model.highlighted_index(), Some(0));
}

#[test]
fn commit_on_same_item_never_changes_selection() {
    let mut model = HighlightModel::default();
    model.set_selected(Some(1), 3);
    let mut events: Vec<SelectionEvent> = Vec::new();
    for _ in 0..3 {
        events.notify(model.commit());
    }
    assert!(
        events
            .iter()
            .all(|e| *e == SelectionEvent::SameItemReselected)
    );
}

#[test]
fn mouse_hit_beyond_item_count_is_ignored() {
    let mut model = HighlightModel::default();
    model.highlight(1, 4);
    let viewport = Viewport::new(100, 100);
    let applied = model.mouse_highlight(
        PhysicalPosition::new(10.0, 10.0),
        &viewport,
        &FixedRow(4),
        4,
    );
    assert!(!applied);
    assert_eq!(model.highlighted_index(), Some(1));
}

#[test]
fn mouse_hit_inside_range_applies() {
    let mut model = HighlightModel::default();
    let viewport = Viewport::new(100, 100);
    let tester = UniformRowHitTester { row_height: 25.0 };
    assert!(model.mouse_highlight(PhysicalPosition::new(10.0, 60.0), &viewport, &tester, 4));
    assert_eq!(model.highlighted_index(), Some(2));
}

#[test]
fn mouse_hit_after_list_shrank() {
    let mut model = HighlightModel::default();
    let viewport = Viewport::new(100, 100);
    let tester = UniformRowHitTester { row_height: 25.0 };
    // Row 3 exists on screen but the list now holds only 2 items
    assert!(!model.mouse_highlight(PhysicalPosition::new(10.0, 80.0), &viewport, &tester, 2));
    assert_eq!(model.highlighted_index(), None);
}

#[test]
fn enter_with_nothing_highlighted_confirms_current() {
    let mut model = HighlightModel::default();
    let items = vec!["one".to_string()];
    let out = route_key(
        &mut model,
        &Key::Named(NamedKey::Enter),
        ModifiersState::empty(),
        &items,
    );
    assert_eq!(out.event, Some(SelectionEvent::SameItemReselected));
    assert!(out.handled);
}

#[test]
fn enter_after_list_shrank_never_selects_beyond_bound() {
    let mut model = HighlightModel::default();
    model.highlight(4, 5);
    let items = vec!["one".to_string(), "two".to_string()];
    let out = route_key(
        &mut model,
        &Key::Named(NamedKey::Enter),
        ModifiersState::empty(),
        &items,
    );
    assert!(model.selected_index().is_some_and(|s| s < items.len()));
    assert_eq!(out.event, Some(SelectionEvent::SelectionChanged(1)));
}

#[test]
fn enter_on_emptied_list_selects_nothing() {
    let mut model = HighlightModel::default();
    model.set_selected(Some(2), 3);
    let items: Vec<String> = Vec::new();
    let out = route_key(
        &mut model,
        &Key::Named(NamedKey::Enter),
        ModifiersState::empty(),
        &items,
    );
    assert_eq!(model.selected_index(), None);
    assert_eq!(out.event, Some(SelectionEvent::SameItemReselected));
}
