//!
//! src/message/mod.rs
//! Message 层：事件翻译后的消息
//!
//! Event 层把按键翻译成消息，Update 层消费消息修改 Model。
//! 后台同步结果同样以消息的形式进入 Update 层。
//!
//!     AppMessage
//!      ├── Route(RouteMessage)        // 编辑路线：开始 / 勾选 / 确认
//!      ├── Focus(FocusMessage)        // 路线列表焦点移动与分类
//!      ├── Persist(PersistMessage)    // Save / Load
//!      ├── Sync(SyncMessage)          // 提交 / 拉取统计及其结果
//!      └── Modal(ModalMessage)        // 弹窗
//!

mod app;
mod focus;
mod modal;
mod persist;
mod route;
mod sync;

pub use app::AppMessage;
pub use focus::FocusMessage;
pub use modal::ModalMessage;
pub use persist::PersistMessage;
pub use route::RouteMessage;
pub use sync::SyncMessage;
