//! Route editing state
//!
//! The route is an ordered subset of entry indices: set semantics for membership,
//! toggle order for sequence.

use crate::error::{CoreError, CoreResult};

/// Editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Route is being rebuilt through toggles
    Editing,
    /// Route is fixed and drives display and navigation order
    #[default]
    Confirmed,
}

/// Ordered selection set
#[derive(Debug, Clone)]
pub struct RouteEditor {
    route: Vec<usize>,
    mode: EditMode,
    /// Entry count N
    capacity: usize,
}

impl RouteEditor {
    /// Initial state: every entry in index order, confirmed
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            route: (0..capacity).collect(),
            mode: EditMode::Confirmed,
            capacity,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Enter editing mode and clear the route
    pub fn begin_edit(&mut self) {
        self.mode = EditMode::Editing;
        self.route.clear();
    }

    /// Include or exclude one entry.
    ///
    /// Returns whether the route changed. Toggling to the current state is a no-op,
    /// and outside editing mode the route is immutable, so both return `false`.
    pub fn toggle(&mut self, index: usize, included: bool) -> CoreResult<bool> {
        if index >= self.capacity {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.capacity,
            });
        }
        if !self.is_editing() {
            log::debug!("Ignoring toggle of entry {index} outside edit mode");
            return Ok(false);
        }

        let pos = self.route.iter().position(|&i| i == index);
        match (included, pos) {
            (true, None) => {
                self.route.push(index);
                Ok(true)
            }
            (false, Some(pos)) => {
                self.route.remove(pos);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Confirm the route; returns it for chain rebuild and persistence
    pub fn confirm_edit(&mut self) -> &[usize] {
        self.mode = EditMode::Confirmed;
        &self.route
    }

    pub fn current_route(&self) -> &[usize] {
        &self.route
    }

    pub fn contains(&self, index: usize) -> bool {
        self.route.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(capacity: usize) -> RouteEditor {
        let mut editor = RouteEditor::new(capacity);
        editor.begin_edit();
        editor
    }

    #[test]
    fn initial_route_is_identity_and_confirmed() {
        let editor = RouteEditor::new(4);
        assert_eq!(editor.current_route(), &[0, 1, 2, 3]);
        assert_eq!(editor.mode(), EditMode::Confirmed);
    }

    #[test]
    fn begin_edit_clears_route() {
        let editor = editing(4);
        assert!(editor.is_editing());
        assert!(editor.is_empty());
    }

    #[test]
    fn toggle_keeps_selection_order() {
        let mut editor = editing(5);
        editor.toggle(3, true).unwrap();
        editor.toggle(0, true).unwrap();
        editor.toggle(4, true).unwrap();
        assert_eq!(editor.current_route(), &[3, 0, 4]);
    }

    #[test]
    fn toggle_is_idempotent() {
        let mut editor = editing(3);
        assert!(editor.toggle(1, true).unwrap());
        assert!(!editor.toggle(1, true).unwrap());
        assert_eq!(editor.current_route(), &[1]);
        assert!(!editor.toggle(2, false).unwrap());
        assert_eq!(editor.current_route(), &[1]);
    }

    #[test]
    fn toggle_off_restores_previous_route() {
        let mut editor = editing(5);
        editor.toggle(2, true).unwrap();
        editor.toggle(0, true).unwrap();
        let before = editor.current_route().to_vec();

        editor.toggle(4, true).unwrap();
        editor.toggle(4, false).unwrap();
        assert_eq!(editor.current_route(), before.as_slice());
    }

    #[test]
    fn removal_preserves_remaining_order() {
        let mut editor = editing(5);
        for i in [4, 1, 3, 0] {
            editor.toggle(i, true).unwrap();
        }
        editor.toggle(1, false).unwrap();
        assert_eq!(editor.current_route(), &[4, 3, 0]);
    }

    #[test]
    fn retoggle_appends_at_end() {
        let mut editor = editing(3);
        editor.toggle(0, true).unwrap();
        editor.toggle(1, true).unwrap();
        editor.toggle(0, false).unwrap();
        editor.toggle(0, true).unwrap();
        assert_eq!(editor.current_route(), &[1, 0]);
    }

    #[test]
    fn toggle_out_of_range_rejected() {
        let mut editor = editing(2);
        assert_eq!(
            editor.toggle(2, true),
            Err(CoreError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(editor.is_empty());
    }

    #[test]
    fn toggle_ignored_when_confirmed() {
        let mut editor = RouteEditor::new(3);
        assert!(!editor.toggle(1, true).unwrap());
        assert_eq!(editor.current_route(), &[0, 1, 2]);
    }

    #[test]
    fn confirm_returns_route() {
        let mut editor = editing(3);
        editor.toggle(2, true).unwrap();
        editor.toggle(0, true).unwrap();
        assert_eq!(editor.confirm_edit(), &[2, 0]);
        assert_eq!(editor.mode(), EditMode::Confirmed);
    }

    #[test]
    fn route_never_exceeds_capacity() {
        let mut editor = editing(3);
        for _ in 0..3 {
            for i in 0..3 {
                editor.toggle(i, true).unwrap();
            }
        }
        assert_eq!(editor.len(), 3);
    }
}
