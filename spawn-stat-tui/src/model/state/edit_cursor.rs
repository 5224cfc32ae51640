//! 编辑模式光标
//!
//! 编辑时列表按索引顺序显示全部条目，光标在其中移动。

use super::super::RouteViewport;

/// 编辑列表的选中行
#[derive(Debug, Clone, Default)]
pub struct EditCursor {
    /// 当前选中的条目索引
    pub selected: usize,
    pub viewport: RouteViewport,
}

impl EditCursor {
    /// 回到第一项
    pub fn reset(&mut self) {
        self.selected = 0;
        self.viewport.reset();
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.viewport.reveal(self.selected);
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
        self.viewport.reveal(self.selected);
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.viewport.reveal(self.selected);
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
        self.viewport.reveal(self.selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_bounds() {
        let mut cursor = EditCursor::default();
        cursor.select_previous();
        assert_eq!(cursor.selected, 0);
        for _ in 0..5 {
            cursor.select_next(3);
        }
        assert_eq!(cursor.selected, 2);
        cursor.select_next(0);
        assert_eq!(cursor.selected, 2);
    }

    #[test]
    fn first_and_last() {
        let mut cursor = EditCursor::default();
        cursor.viewport.set_height(2);
        cursor.select_last(10);
        assert_eq!(cursor.selected, 9);
        assert_eq!(cursor.viewport.offset(), 8);
        cursor.select_first();
        assert_eq!(cursor.viewport.offset(), 0);
    }
}
