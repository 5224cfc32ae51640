//! Scrollable container abstraction

/// The scrollable view hosting the focus chain.
///
/// Platform implementation:
/// - TUI: `RouteViewport` (list offset measured in entry rows)
pub trait ScrollContainer {
    /// How far the chain element at `position` lies outside the visible
    /// area: negative above it, positive below it, `0` while visible.
    ///
    /// The focus chain scrolls by exactly this amount, so a visible target
    /// never moves the view and a hidden one lands on the nearest edge.
    fn relative_offset(&self, position: usize) -> isize;

    /// Move the scroll offset by `delta`.
    fn scroll_by(&mut self, delta: isize);
}
