/// 任务状态（由任务自身维护，外部只读）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// 已创建，尚未启动
    New,
    /// 后台循环正在推进
    Active,
    /// 正常跑完
    Completed,
    /// 被取消，附带原因（可能为空白）
    Cancelled { reason: String },
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Cancelled { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, JobStatus::Cancelled { .. })
    }
}
