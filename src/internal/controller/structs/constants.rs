/// 第一次模拟请求的结果
pub const RESULT_1: &str = "Result #1";

/// 第二次模拟请求的结果
pub const RESULT_2: &str = "Result #2";

/// 任务按钮：空闲 / 就绪
pub const START_JOB_LABEL: &str = "Start job";

/// 任务按钮：运行中
pub const CANCEL_JOB_LABEL: &str = "Cancel Job #1";

/// 任务跑满后显示的文案
pub const JOB_COMPLETE_TEXT: &str = "Job is Complete";

/// 运行中再次触发时，取消当前任务使用的原因
pub const RESET_REASON: &str = "Resetting job";

/// 控制器关闭时取消当前任务使用的原因
pub const SHUTDOWN_REASON: &str = "Controller shut down";
