//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │ AppMessage│          └────┬─────┘         │   │
//！│  │        ▲               │ RouteMsg  │               │ 修改          │   │
//！│  │        │               │ FocusMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ PersistMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ SyncMsg   │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 后台同步          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  spawn-stat-core  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 路线、分类与焦点链由 spawn-stat-core 的 `RouteSession` 持有，
//! 这里只补充界面相关的状态：
//!
//!     App
//!      ├── session: RouteSession        // 条目、路线、焦点链（core）
//!      ├── focus: FocusState            // 当前焦点条目 + 路线列表视口
//!      ├── edit_cursor: EditCursor      // 编辑模式下的光标 + 全部条目列表视口
//!      ├── modal: ModalState            // 帮助 / 错误弹窗
//!      └── sync: SyncState              // 后台请求是否在途
//!
//! 所有状态变更都通过 Update 层来触发。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::{FocusState, RouteViewport};
pub use state::{EditCursor, Modal, ModalState, SyncState};

#[cfg(test)]
pub(crate) use app::test_support;
