//! 统计同步消息

use spawn_stat_core::types::SubmitRequest;
use spawn_stat_core::{CoreResult, StatsUpdate};

#[derive(Debug, Clone)]
pub enum SyncMessage {
    /// 提交当前分类
    Submit,
    /// 重新拉取统计
    RefetchStats,
    /// 提交完成（由后台送回），成功时带回已提交的快照
    Submitted(CoreResult<SubmitRequest>),
    /// 统计拉取完成（由后台送回）
    StatsFetched(CoreResult<StatsUpdate>),
}
