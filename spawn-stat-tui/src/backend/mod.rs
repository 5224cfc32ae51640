//!
//! src/backend/mod.rs
//! Backend 层：配置与统计同步
//!
//! Backend 层与 UI 完全解耦。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（JSON）
//!         mod sync_worker;        // 后台统计同步
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：<config_dir>/spawn-stat-tui/config.json
//!
//!         {
//!           "theme": "dark",
//!           "resourceDir": "resource",
//!           "routeFile": "route.dat",
//!           "saveFile": "save.json",
//!           "sync": {
//!             "submitUrl": "http://127.0.0.1:8080/drops",
//!             "statsUrl": "http://127.0.0.1:8080/stats",
//!             "timeoutSecs": 30,
//!             "fetchOnStartup": true
//!           }
//!         }
//!
//!     文件缺失时使用默认值；文件损坏时记录警告并使用默认值。
//!     routeFile / saveFile 为相对路径时相对于配置目录。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、统计同步（SyncWorker）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     SyncWorker 持有一个 tokio 运行时和 spawn-stat-core 的 RemoteSync。
//!     UI 线程不等待网络：
//!
//!         Update 层处理 SyncMessage::Submit
//!             ↓
//!         RouteSession::submission_request()      // 在 UI 线程生成请求快照
//!             ↓
//!         SyncWorker::submit(request)             // 在运行时上执行，立即返回
//!             ↓
//!         结果经 std::sync::mpsc 送回
//!             ↓
//!         主循环 App::poll_sync() 取出，作为 SyncMessage::Submitted 整体应用
//!

mod config_service;
mod sync_worker;

pub use config_service::{config_dir, AppConfig, ConfigService, LocalConfigService};
pub use sync_worker::{SyncEvent, SyncWorker};
