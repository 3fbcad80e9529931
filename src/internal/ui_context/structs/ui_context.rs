use tokio::sync::oneshot;

use crate::config::ControllerConfig;
use crate::internal::states::queue_reactive::QueueReactiveProperty;

use super::ui_command::{UiCommand, UiEnvelope};
use super::ui_context_error::UiContextError;
use super::ui_loop::UiLoop;
use super::view_hooks_container::ViewHooksContainer;
use super::view_state::ViewState;

/// UI 上下文句柄（生产者端），可随意克隆给后台任务。
///
/// 所有视图变更都封装为 [`UiCommand`] 排入同一个 FIFO 队列，
/// 由唯一的 [`UiLoop`] 串行执行，视图属性因此不会被并发写坏。
#[derive(Debug, Clone)]
pub(crate) struct UiContext {
    queue: QueueReactiveProperty<UiEnvelope>,
    warn_depth: usize,
}

impl UiContext {
    /// 创建句柄与对应的执行循环；循环需要由调用方 spawn。
    pub(crate) fn new(
        view: ViewState,
        hooks: ViewHooksContainer,
        config: &ControllerConfig,
    ) -> (Self, UiLoop) {
        let (queue, consumer) = QueueReactiveProperty::new();

        let ui_loop = UiLoop::new(consumer, view, hooks, config.notification_duration());

        (
            Self {
                queue,
                warn_depth: config.ui_queue_warn_depth,
            },
            ui_loop,
        )
    }

    /// 切到 UI 上下文执行命令，并等待其生效后返回。
    pub(crate) async fn run(&self, command: UiCommand) -> Result<(), UiContextError> {
        let (ack, done) = oneshot::channel();
        self.enqueue(UiEnvelope {
            command,
            ack: Some(ack),
        })?;
        done.await.map_err(|_| UiContextError::AckDropped)
    }

    /// 投递命令后立即返回，不等待执行。
    pub(crate) fn post(&self, command: UiCommand) -> Result<(), UiContextError> {
        self.enqueue(UiEnvelope { command, ack: None })
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }

    fn enqueue(&self, envelope: UiEnvelope) -> Result<(), UiContextError> {
        let depth = self
            .queue
            .send(envelope)
            .map_err(|_| UiContextError::Closed)?;
        if depth > self.warn_depth {
            tracing::warn!(depth, limit = self.warn_depth, "ui context backlog is growing");
        }
        Ok(())
    }
}
