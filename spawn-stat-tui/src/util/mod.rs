//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（tracing-subscriber）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     日志：
//!         终端在运行期间处于原始模式并占用备用屏幕，不能向 stdout/stderr 输出日志。
//!         所有 `log::` 记录经 tracing-subscriber 写入
//!             <config_dir>/spawn-stat-tui/spawn-stat.log
//!         级别由 RUST_LOG 控制，默认 info。
//!
//!
//!     终端：
//!         pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!         init_terminal()     启用原始模式、进入备用屏幕，并安装 panic hook，
//!                             保证 panic 时终端同样被恢复
//!         restore_terminal()  无论程序正常退出还是出错，都必须调用

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
