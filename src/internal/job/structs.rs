pub mod job;
pub mod job_id;
pub mod job_outcome;
pub mod job_status;

// 重导出公共类型
pub use job::Job;
pub use job_id::JobId;
pub use job_outcome::{DEFAULT_CANCEL_REASON, JobOutcome, normalize_cancel_reason};
pub use job_status::JobStatus;
