//! Keyboard routing for list and combo controls.
//!
//! - Printable characters: type-ahead to the first matching item, commit,
//!   close the popup
//! - Enter: commit, handled
//! - Tab: commit, left unhandled so the host can still move focus
//! - ArrowUp/ArrowDown: move the highlight
//! - Escape: close the popup without committing

use winit::keyboard::{Key, ModifiersState, NamedKey};

use crate::highlight::{HighlightModel, SelectionEvent};
use crate::items::{ItemLabels, find_string};

/// What routing a key did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The key was consumed and must not propagate to the host
    pub handled: bool,
    /// Any transient popup should close
    pub close_popup: bool,
    /// Notification raised by a commit
    pub event: Option<SelectionEvent>,
}

impl KeyOutcome {
    fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }
}

fn is_command_chord(modifiers: ModifiersState) -> bool {
    modifiers.control_key() || modifiers.alt_key() || modifiers.super_key()
}

/// Apply `key` to `model` over `items`.
pub fn route_key<L>(
    model: &mut HighlightModel,
    key: &Key,
    modifiers: ModifiersState,
    items: &L,
) -> KeyOutcome
where
    L: ItemLabels + ?Sized,
{
    // The list may have shrunk since the model last saw it.
    model.clamp_to(items.item_count());
    match key {
        Key::Named(NamedKey::Enter) => KeyOutcome {
            handled: true,
            close_popup: true,
            event: Some(model.commit()),
        },
        Key::Named(NamedKey::Tab) => KeyOutcome {
            handled: false,
            close_popup: true,
            event: Some(model.commit()),
        },
        Key::Named(NamedKey::ArrowDown) => {
            model.move_highlight_down(items.item_count());
            KeyOutcome::handled()
        }
        Key::Named(NamedKey::ArrowUp) => {
            model.move_highlight_up(items.item_count());
            KeyOutcome::handled()
        }
        Key::Named(NamedKey::Escape) => KeyOutcome {
            handled: true,
            close_popup: true,
            event: None,
        },
        Key::Character(text) if !is_command_chord(modifiers) => {
            let Some(ch) = text.chars().next().filter(|c| !c.is_control()) else {
                return KeyOutcome::default();
            };
            let mut buf = [0u8; 4];
            let event = match find_string(items, ch.encode_utf8(&mut buf)) {
                Some(index) => {
                    model.highlight(index, items.item_count());
                    Some(model.commit())
                }
                None => {
                    log::debug!("No item starts with {:?}", ch);
                    None
                }
            };
            KeyOutcome {
                handled: true,
                close_popup: true,
                event,
            }
        }
        _ => KeyOutcome::default(),
    }
}
