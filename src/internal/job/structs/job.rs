use crate::states::lock_reactive::LockReactiveProperty;

use super::job_id::JobId;
use super::job_outcome::JobOutcome;
use super::job_status::JobStatus;

/// 可取消的单个后台工作单元。
///
/// 状态迁移只有四条：`New → Active`、`Active → Completed`、
/// `New | Active → Cancelled`。终态之后的任何迁移请求都会被忽略，
/// 因此取消与完成之间的竞争只会有一个赢家。
#[derive(Debug)]
pub struct Job {
    id: JobId,
    status: LockReactiveProperty<JobStatus>,
}

impl Job {
    pub(crate) fn new() -> Self {
        Self {
            id: JobId::next(),
            status: LockReactiveProperty::new(JobStatus::New),
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub async fn status(&self) -> JobStatus {
        self.status.get_current().await
    }

    /// `New → Active`，返回是否迁移成功。
    pub(crate) async fn activate(&self) -> bool {
        self.status
            .update_if(|cur| matches!(cur, JobStatus::New).then_some(JobStatus::Active))
            .await
    }

    /// `Active → Completed`，返回是否迁移成功。
    pub(crate) async fn complete(&self) -> bool {
        self.status
            .update_if(|cur| matches!(cur, JobStatus::Active).then_some(JobStatus::Completed))
            .await
    }

    /// 取消任务。已处于终态时不做任何事并返回 `false`。
    pub async fn cancel(&self, reason: impl Into<String>) -> bool {
        let reason = reason.into();
        let cancelled = self
            .status
            .update_if(|cur| {
                (!cur.is_terminal()).then(|| JobStatus::Cancelled {
                    reason: reason.clone(),
                })
            })
            .await;

        if cancelled {
            tracing::debug!(job = %self.id, reason = %reason, "job cancelled");
        }
        cancelled
    }

    /// 挂起直到任务进入终态，返回终态结果。
    pub async fn outcome(&self) -> JobOutcome {
        let status = self.status.wait_until(JobStatus::is_terminal).await;
        match JobOutcome::from_status(&status) {
            Some(outcome) => outcome,
            // wait_until 只会在终态返回
            None => JobOutcome::Cancelled {
                reason: String::new(),
            },
        }
    }

    /// 挂起直到任务被取消；任务正常完成时永不返回，供 `select!` 使用。
    pub(crate) async fn cancelled(&self) {
        self.status.wait_until(JobStatus::is_cancelled).await;
    }
}
