//! Receivers for selection notifications.

use crate::highlight::SelectionEvent;

/// Receives `SelectionEvent`s raised by a control.
pub trait SelectionSink {
    fn notify(&mut self, event: SelectionEvent);
}

/// Collects events in order; mostly useful in tests.
impl SelectionSink for Vec<SelectionEvent> {
    fn notify(&mut self, event: SelectionEvent) {
        self.push(event);
    }
}

/// Adapts a closure into a `SelectionSink`.
pub struct FnSink<F>(pub F);

impl<F: FnMut(SelectionEvent)> SelectionSink for FnSink<F> {
    fn notify(&mut self, event: SelectionEvent) {
        (self.0)(event);
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SelectionSink for NullSink {
    fn notify(&mut self, _event: SelectionEvent) {}
}
