use tokio::sync::oneshot;

use crate::job::JobId;

/// 视图变更命令（通过 QueueReactiveProperty 传递，FIFO 保证顺序）
#[derive(Debug)]
pub(crate) enum UiCommand {
    /// 覆盖文本区
    SetText(String),
    /// 在现有文本后追加一行（以换行分隔）
    AppendLine(String),
    SetButtonLabel(String),
    /// 把进度条和文本区交给新任务：进度归零、文本清空、按钮复位
    BindJob { job: JobId, button_label: String },
    /// 任务被取消后释放进度条；之后该任务的发布一律丢弃
    UnbindJob { job: JobId },
    /// 任务进度；来自非当前任务的进度会被丢弃
    SetProgress { job: JobId, value: u8 },
    /// 任务结束文案；同样只接受当前任务
    PublishJobText { job: JobId, text: String },
    /// 弹出短时通知
    Notify(String),
    /// 执行关闭钩子后退出，之后的命令全部拒收
    Shutdown,
}

/// 队列中的一条命令，附带可选的执行确认。
#[derive(Debug)]
pub(crate) struct UiEnvelope {
    pub(crate) command: UiCommand,
    pub(crate) ack: Option<oneshot::Sender<()>>,
}
