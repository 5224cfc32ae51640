//! 后台统计同步

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use spawn_stat_core::types::{SubmitRequest, SyncConfig};
use spawn_stat_core::{CoreResult, HttpTransport, RemoteSync, StatsUpdate};
use tokio::runtime::{Builder, Runtime};

/// 后台任务完成后送回 UI 线程的结果
#[derive(Debug)]
pub enum SyncEvent {
    /// 成功时带回已提交的快照
    Submitted(CoreResult<SubmitRequest>),
    StatsFetched(CoreResult<StatsUpdate>),
}

/// 在独立 tokio 运行时上执行网络请求
pub struct SyncWorker {
    runtime: Runtime,
    sync: Arc<RemoteSync>,
    tx: Sender<SyncEvent>,
    rx: Receiver<SyncEvent>,
}

impl SyncWorker {
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("spawn-stat-sync")
            .enable_all()
            .build()
            .context("failed to start sync runtime")?;
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        let sync = Arc::new(RemoteSync::new(Arc::new(transport), config.clone()));
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            sync,
            tx,
            rx,
        })
    }

    /// 提交分类快照，结果稍后经 [`try_recv`](Self::try_recv) 返回
    pub fn submit(&self, request: SubmitRequest) {
        let sync = Arc::clone(&self.sync);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = sync.submit(&request).await.map(|()| request);
            if tx.send(SyncEvent::Submitted(result)).is_err() {
                log::debug!("UI gone, dropping submit result");
            }
        });
    }

    /// 拉取聚合统计
    pub fn fetch_stats(&self) {
        let sync = Arc::clone(&self.sync);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = sync.fetch_stats().await;
            if tx.send(SyncEvent::StatsFetched(result)).is_err() {
                log::debug!("UI gone, dropping stats result");
            }
        });
    }

    /// 非阻塞地取出一个已完成的结果
    pub fn try_recv(&self) -> Option<SyncEvent> {
        self.rx.try_recv().ok()
    }
}
