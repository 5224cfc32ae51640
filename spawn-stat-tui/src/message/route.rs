//! 路线编辑消息

/// 编辑模式下的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMessage {
    /// 进入编辑模式（清空路线）
    BeginEdit,
    /// 确认路线
    ConfirmEdit,
    /// 勾选 / 取消勾选光标所在条目
    ToggleAtCursor,
    /// 光标上移
    CursorPrevious,
    /// 光标下移
    CursorNext,
    /// 光标到第一项
    CursorFirst,
    /// 光标到最后一项
    CursorLast,
}
