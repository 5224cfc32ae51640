//! 应用主消息枚举

use super::{FocusMessage, ModalMessage, PersistMessage, RouteMessage, SyncMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 路线编辑相关消息
    Route(RouteMessage),

    /// 焦点与分类相关消息
    Focus(FocusMessage),

    /// Save / Load
    Persist(PersistMessage),

    /// 统计同步
    Sync(SyncMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 关闭弹窗或清除状态消息
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
