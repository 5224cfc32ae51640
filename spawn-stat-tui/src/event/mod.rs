//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     按键分发顺序：
//!         1. 只处理 Press 事件
//!         2. 有弹窗时只处理弹窗按键（Esc / Enter 关闭，Ctrl+c 退出）
//!         3. 全局快捷键（退出、帮助、Save/Load、提交、编辑路线）
//!         4. 按编辑模式分发：
//!             · Confirmed   ↑↓/jk 移动焦点，1/2/3 分类并前移，0 清除分类
//!             · Editing     ↑↓/jk 移动光标，Space 勾选，Enter 确认路线
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
