//! Focus chain
//!
//! Built from the confirmed route, one handle per route position, in order.
//! The focus position is not stored: callers pass the entry holding focus and
//! the chain resolves it by a linear scan, first match wins.

use crate::traits::ScrollContainer;

/// Navigable sequence of entry handles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusChain {
    handles: Vec<usize>,
}

impl FocusChain {
    /// Full rebuild from a route, no diffing against a previous chain
    #[must_use]
    pub fn from_route(route: &[usize]) -> Self {
        Self {
            handles: route.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn handles(&self) -> &[usize] {
        &self.handles
    }

    /// Handle at `position`
    pub fn get(&self, position: usize) -> Option<usize> {
        self.handles.get(position).copied()
    }

    pub fn first(&self) -> Option<usize> {
        self.handles.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.handles.last().copied()
    }

    /// Chain position of the focused entry; `None` without focus or when it is outside the chain
    pub fn position_of(&self, focused: Option<usize>) -> Option<usize> {
        let focused = focused?;
        self.handles.iter().position(|&h| h == focused)
    }

    /// Move focus one step forward and scroll it into view; returns the new target.
    ///
    /// No-op returning `None` without focus or at the last element.
    pub fn next(&self, focused: Option<usize>, container: &mut dyn ScrollContainer) -> Option<usize> {
        let current = self.position_of(focused)?;
        if current + 1 >= self.handles.len() {
            return None;
        }
        Some(self.move_to(current + 1, container))
    }

    /// Move focus one step back; mirror of [`next`](Self::next)
    pub fn prev(&self, focused: Option<usize>, container: &mut dyn ScrollContainer) -> Option<usize> {
        let current = self.position_of(focused)?;
        if current == 0 {
            return None;
        }
        Some(self.move_to(current - 1, container))
    }

    /// Jump to any position (Home / End and initial focus)
    pub fn focus_at(&self, position: usize, container: &mut dyn ScrollContainer) -> Option<usize> {
        if position >= self.handles.len() {
            return None;
        }
        Some(self.move_to(position, container))
    }

    fn move_to(&self, position: usize, container: &mut dyn ScrollContainer) -> usize {
        // nudge by the relative offset, never center
        let delta = container.relative_offset(position);
        container.scroll_by(delta);
        self.handles[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One row per position, records the scroll offset
    #[derive(Default)]
    struct RowViewport {
        offset: isize,
        scrolls: Vec<isize>,
    }

    impl ScrollContainer for RowViewport {
        fn relative_offset(&self, position: usize) -> isize {
            position as isize - self.offset
        }

        fn scroll_by(&mut self, delta: isize) {
            self.offset += delta;
            self.scrolls.push(delta);
        }
    }

    #[test]
    fn next_k_times_moves_min_k_steps() {
        let chain = FocusChain::from_route(&[7, 3, 5, 1]);
        for k in 0..8 {
            let mut viewport = RowViewport::default();
            let mut focused = chain.first();
            for _ in 0..k {
                if let Some(target) = chain.next(focused, &mut viewport) {
                    focused = Some(target);
                }
            }
            let expected = k.min(chain.len() - 1);
            assert_eq!(chain.position_of(focused), Some(expected), "k = {k}");
        }
    }

    #[test]
    fn prev_at_first_is_noop() {
        let chain = FocusChain::from_route(&[2, 0]);
        let mut viewport = RowViewport::default();
        assert_eq!(chain.prev(Some(2), &mut viewport), None);
        assert!(viewport.scrolls.is_empty());
    }

    #[test]
    fn next_at_last_is_noop() {
        let chain = FocusChain::from_route(&[2, 0]);
        let mut viewport = RowViewport::default();
        assert_eq!(chain.next(Some(0), &mut viewport), None);
    }

    #[test]
    fn no_focus_is_noop() {
        let chain = FocusChain::from_route(&[2, 0, 1]);
        let mut viewport = RowViewport::default();
        assert_eq!(chain.next(None, &mut viewport), None);
        assert_eq!(chain.prev(None, &mut viewport), None);
        // focus sits on an entry outside the chain
        assert_eq!(chain.next(Some(9), &mut viewport), None);
    }

    #[test]
    fn empty_chain_is_noop() {
        let chain = FocusChain::from_route(&[]);
        let mut viewport = RowViewport::default();
        assert!(chain.is_empty());
        assert_eq!(chain.next(Some(0), &mut viewport), None);
        assert_eq!(chain.prev(Some(0), &mut viewport), None);
        assert_eq!(chain.first(), None);
    }

    #[test]
    fn prev_moves_back_by_route_order() {
        let chain = FocusChain::from_route(&[4, 2, 9]);
        let mut viewport = RowViewport::default();
        assert_eq!(chain.prev(Some(9), &mut viewport), Some(2));
        assert_eq!(chain.prev(Some(2), &mut viewport), Some(4));
    }

    #[test]
    fn move_nudges_scroll_by_relative_offset() {
        let chain = FocusChain::from_route(&[0, 1, 2, 3]);
        let mut viewport = RowViewport {
            offset: 1,
            scrolls: Vec::new(),
        };
        // target position 2, relative offset 2 - 1 = 1
        assert_eq!(chain.next(Some(1), &mut viewport), Some(2));
        assert_eq!(viewport.scrolls, vec![1]);
        assert_eq!(viewport.offset, 2);

        // back to position 1, relative offset 1 - 2 = -1
        assert_eq!(chain.prev(Some(2), &mut viewport), Some(1));
        assert_eq!(viewport.scrolls, vec![1, -1]);
        assert_eq!(viewport.offset, 1);
    }

    #[test]
    fn duplicate_handle_resolves_to_first_match() {
        let chain = FocusChain {
            handles: vec![5, 6, 5],
        };
        assert_eq!(chain.position_of(Some(5)), Some(0));
    }

    #[test]
    fn focus_at_bounds() {
        let chain = FocusChain::from_route(&[3, 1]);
        let mut viewport = RowViewport::default();
        assert_eq!(chain.focus_at(1, &mut viewport), Some(1));
        assert_eq!(chain.focus_at(2, &mut viewport), None);
    }
}
