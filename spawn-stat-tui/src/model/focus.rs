//! 焦点状态定义
//!
//! 列表中每个条目占一行，视口按行计量。

use spawn_stat_core::ScrollContainer;

/// 列表视口：首个可见行与可见行数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteViewport {
    offset: usize,
    height: usize,
}

impl Default for RouteViewport {
    fn default() -> Self {
        Self {
            offset: 0,
            height: 1,
        }
    }
}

impl RouteViewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// 回到顶部
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// 滚动使 `position` 可见
    pub fn reveal(&mut self, position: usize) {
        let delta = self.relative_offset(position);
        self.scroll_by(delta);
    }
}

impl ScrollContainer for RouteViewport {
    /// 目标行超出视口的行数：上方为负、下方为正、可见时为 0
    fn relative_offset(&self, position: usize) -> isize {
        let position = position as isize;
        let top = self.offset as isize;
        let bottom = top + self.height as isize - 1;
        if position < top {
            position - top
        } else if position > bottom {
            position - bottom
        } else {
            0
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
    }
}

/// 路线列表的焦点
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    /// 当前持有焦点的条目索引（不是链中位置）
    pub target: Option<usize>,
    pub viewport: RouteViewport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(offset: usize, height: usize) -> RouteViewport {
        RouteViewport { offset, height }
    }

    #[test]
    fn visible_rows_need_no_scroll() {
        let v = viewport(5, 10);
        assert_eq!(v.relative_offset(5), 0);
        assert_eq!(v.relative_offset(14), 0);
    }

    #[test]
    fn rows_outside_report_distance() {
        let v = viewport(5, 10);
        assert_eq!(v.relative_offset(3), -2);
        assert_eq!(v.relative_offset(15), 1);
        assert_eq!(v.relative_offset(20), 6);
    }

    #[test]
    fn reveal_scrolls_minimally() {
        let mut v = viewport(0, 3);
        v.reveal(4);
        assert_eq!(v.offset(), 2);
        v.reveal(3);
        assert_eq!(v.offset(), 2);
        v.reveal(0);
        assert_eq!(v.offset(), 0);
    }

    #[test]
    fn height_never_zero() {
        let mut v = RouteViewport::default();
        v.set_height(0);
        v.reveal(3);
        assert_eq!(v.offset(), 3);
    }
}
