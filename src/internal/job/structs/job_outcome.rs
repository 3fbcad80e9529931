//! 任务终态：完成监听器显式检查这个值，而不是从错误信息里猜测。

use super::job_status::JobStatus;

/// 取消原因为空白时展示的默认文案。
pub const DEFAULT_CANCEL_REASON: &str = "Unknown cancellation error";

/// 任务的终态结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Completed,
    Cancelled { reason: String },
}

impl JobOutcome {
    /// 终态对应的用户通知文案；正常完成不需要通知。
    pub fn notification_text(&self) -> Option<String> {
        match self {
            JobOutcome::Completed => None,
            JobOutcome::Cancelled { reason } => Some(normalize_cancel_reason(reason)),
        }
    }

    pub(crate) fn from_status(status: &JobStatus) -> Option<Self> {
        match status {
            JobStatus::Completed => Some(JobOutcome::Completed),
            JobStatus::Cancelled { reason } => Some(JobOutcome::Cancelled {
                reason: reason.clone(),
            }),
            JobStatus::New | JobStatus::Active => None,
        }
    }
}

/// 空白原因替换为 [`DEFAULT_CANCEL_REASON`]，其他原因原样保留。
pub fn normalize_cancel_reason(reason: &str) -> String {
    if reason.trim().is_empty() {
        DEFAULT_CANCEL_REASON.to_string()
    } else {
        reason.to_string()
    }
}
