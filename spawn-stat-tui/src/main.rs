//! Artifact Spawn Stat TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与统计同步 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入配置目录下的 spawn-stat.log（终端归 UI 使用）
//!     load config             // <config_dir>/spawn-stat-tui/config.json，缺失时使用默认值
//!     scan_catalog()          // 扫描资源目录，确定条目数 N
//!     model::App::new()       // 创建会话与 APP 实例
//!     update::startup()       // 恢复路线文件，按配置拉取统计
//!     init_terminal()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use spawn_stat_core::{scan_catalog, EntryStore, FileStorage, RouteSession};

use backend::{config_dir, ConfigService, LocalConfigService, SyncWorker};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志与配置
    let dir = config_dir();
    init_logging(&dir)?;
    log::info!("Starting Artifact Spawn Stat TUI");

    let config_path = dir.join("config.json");
    let config_service = LocalConfigService::new(config_path.clone());
    let config = config_service.load_or_default();
    // 首次运行时写出默认配置，方便手动修改
    if !config_path.exists() {
        if let Err(e) = config_service.save(&config) {
            log::warn!("Failed to write default config: {e:#}");
        }
    }
    view::theme::set_theme(config.theme);

    // 2. 条目与会话
    let catalog = scan_catalog(&config.resource_dir);
    let storage = Arc::new(FileStorage::new(config.storage.resolved_in(&dir)));
    let session = RouteSession::new(EntryStore::new(catalog), storage.clone(), storage);

    let worker = match SyncWorker::new(&config.sync) {
        Ok(worker) => Some(worker),
        Err(e) => {
            log::error!("Stats sync disabled: {e:#}");
            None
        }
    };

    // 3. 创建应用实例
    let mut app = model::App::new(session, worker);
    update::startup(&mut app, config.sync.fetch_on_startup);

    // 4. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("Exiting");
    result
}
