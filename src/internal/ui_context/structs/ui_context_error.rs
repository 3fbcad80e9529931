//! UI 上下文相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiContextError {
    #[error("UI 上下文已关闭，命令未被接收")]
    Closed,

    #[error("UI 上下文在执行命令前退出，未收到确认")]
    AckDropped,
}
