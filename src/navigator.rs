//! Caret navigation between the writing-system alternatives of a field.
//!
//! A multi-string field shows one alternative per writing system, in the
//! order of its `WritingSystemSet`. Moving "down" goes to the next
//! alternative, "up" to the previous one; neither wraps. The navigator only
//! computes where the caret should go. Installing the selection is the
//! rendering engine's job.

use polytext_config::WritingSystemSet;

/// Identifies one multi-string field within a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(pub u32);

/// Direction of a move between alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Where the caret currently is, as reported by the rendering engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSelection {
    pub field: FieldId,
    /// Writing system of the alternative holding the caret; `None` when the
    /// selection spans no single recognised writing system
    pub writing_system: Option<String>,
}

impl EditorSelection {
    pub fn new(field: FieldId, writing_system: impl Into<String>) -> Self {
        Self {
            field,
            writing_system: Some(writing_system.into()),
        }
    }
}

/// Request to place the caret at the start of an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretPlacement {
    pub field: FieldId,
    pub writing_system_index: usize,
    /// Character offset within the alternative; always 0 for navigation
    pub offset: usize,
}

/// Stateless navigator over one `WritingSystemSet`.
#[derive(Debug, Clone, Copy)]
pub struct SelectionNavigator<'a> {
    writing_systems: &'a WritingSystemSet,
}

impl<'a> SelectionNavigator<'a> {
    pub fn new(writing_systems: &'a WritingSystemSet) -> Self {
        Self { writing_systems }
    }

    /// Index after `current`, or `None` at the last alternative.
    pub fn next_alternative(&self, current: usize) -> Option<usize> {
        current
            .checked_add(1)
            .filter(|&next| next < self.writing_systems.len())
    }

    /// Index before `current`, or `None` at the first alternative.
    pub fn previous_alternative(&self, current: usize) -> Option<usize> {
        current
            .checked_sub(1)
            .filter(|&previous| previous < self.writing_systems.len())
    }

    /// Caret placement for moving from `selection` in `direction`.
    ///
    /// `None` means "no movement": the caret is at the end of the set, or its
    /// writing system is not part of the set.
    pub fn navigate(
        &self,
        selection: &EditorSelection,
        direction: Direction,
    ) -> Option<CaretPlacement> {
        let current = selection
            .writing_system
            .as_deref()
            .and_then(|ws| self.writing_systems.index_of(ws));
        let Some(current) = current else {
            log::debug!(
                "Selection in field {:?} has no known writing system; not moving",
                selection.field
            );
            return None;
        };

        let target = match direction {
            Direction::Next => self.next_alternative(current),
            Direction::Previous => self.previous_alternative(current),
        }?;

        Some(CaretPlacement {
            field: selection.field,
            writing_system_index: target,
            offset: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> WritingSystemSet {
        WritingSystemSet::new(["en", "fr", "grc", "he"]).unwrap()
    }

    #[test]
    fn test_next_and_previous_round_trip() {
        let set = set();
        let nav = SelectionNavigator::new(&set);
        for i in 1..set.len() - 1 {
            let next = nav.next_alternative(i).unwrap();
            assert_eq!(nav.previous_alternative(next), Some(i));
        }
    }

    #[test]
    fn test_no_wrap_at_ends() {
        let set = set();
        let nav = SelectionNavigator::new(&set);
        assert_eq!(nav.next_alternative(3), None);
        assert_eq!(nav.previous_alternative(0), None);
    }

    #[test]
    fn test_out_of_range_current() {
        let set = set();
        let nav = SelectionNavigator::new(&set);
        assert_eq!(nav.next_alternative(7), None);
        assert_eq!(nav.previous_alternative(9), None);
        assert_eq!(nav.next_alternative(usize::MAX), None);
    }

    #[test]
    fn test_navigate_produces_caret_at_start() {
        let set = set();
        let nav = SelectionNavigator::new(&set);
        let placement = nav
            .navigate(&EditorSelection::new(FieldId(7), "fr"), Direction::Next)
            .unwrap();
        assert_eq!(
            placement,
            CaretPlacement {
                field: FieldId(7),
                writing_system_index: 2,
                offset: 0,
            }
        );
    }

    #[test]
    fn test_unresolved_selection_is_noop() {
        let set = set();
        let nav = SelectionNavigator::new(&set);
        let unknown = EditorSelection::new(FieldId(1), "de");
        assert_eq!(nav.navigate(&unknown, Direction::Next), None);
        let spanning = EditorSelection {
            field: FieldId(1),
            writing_system: None,
        };
        assert_eq!(nav.navigate(&spanning, Direction::Previous), None);
    }
}
