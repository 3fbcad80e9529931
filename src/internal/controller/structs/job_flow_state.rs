use serde::Serialize;

use crate::job::{Job, JobStatus};

/// 可取消任务流程的显式状态。
///
/// 完全由当前任务的状态推导，不看进度值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobFlowState {
    /// 还没有创建过任务
    Idle,
    /// 任务已创建、进度为 0，等待启动
    Ready,
    Running,
    Completed,
    Cancelled,
}

impl JobFlowState {
    pub(crate) async fn of(job: Option<&Job>) -> Self {
        let Some(job) = job else {
            return JobFlowState::Idle;
        };
        match job.status().await {
            JobStatus::New => JobFlowState::Ready,
            JobStatus::Active => JobFlowState::Running,
            JobStatus::Completed => JobFlowState::Completed,
            JobStatus::Cancelled { .. } => JobFlowState::Cancelled,
        }
    }
}
