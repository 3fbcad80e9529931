//! 控制器相关错误类型。
//!
//! 任务被取消不是错误：它以 `JobOutcome::Cancelled` 的形式交给完成监听器。

use thiserror::Error;

use crate::ui::UiContextError;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("当前线程不在 tokio 运行时中，无法启动控制器")]
    NoRuntime,

    #[error("控制器已关闭")]
    ShutDown,

    #[error("UI 上下文错误: {0}")]
    UiContext(#[from] UiContextError),
}
