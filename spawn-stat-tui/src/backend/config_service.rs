//! 配置服务

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spawn_stat_core::types::{StorageConfig, SyncConfig};

use crate::view::theme::Theme;

/// 配置目录：`<config_dir>/spawn-stat-tui`
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spawn-stat-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub theme: Theme,
    /// 资源目录（相对于当前工作目录）
    pub resource_dir: PathBuf,
    #[serde(flatten)]
    pub storage: StorageConfig,
    pub sync: SyncConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            resource_dir: PathBuf::from("resource"),
            storage: StorageConfig::default(),
            sync: SyncConfig::default(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置；文件不存在时返回默认值
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;

    /// 加载失败时记录警告并回退到默认值
    fn load_or_default(&self) -> AppConfig {
        self.load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {e:#}");
            AppConfig::default()
        })
    }
}

/// 本地 JSON 配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
