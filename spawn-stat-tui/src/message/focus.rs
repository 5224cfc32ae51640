//! 焦点消息

use spawn_stat_core::types::DropKind;

/// 路线列表上的焦点操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusMessage {
    Previous,
    Next,
    First,
    Last,
    /// 为焦点条目分类并前移焦点
    Classify(DropKind),
    /// 清除焦点条目的分类
    ClearClassification,
}
