use std::time::Duration;

use crate::internal::states::queue_reactive::QueueReactiveConsumer;
use crate::internal::ui_context::functions::log_thread::log_thread;
use crate::job::JobId;

use super::notification::Notification;
use super::ui_command::{UiCommand, UiEnvelope};
use super::view_hooks_container::ViewHooksContainer;
use super::view_state::{PROGRESS_CEILING, ViewState};

/// UI 上下文执行循环（消费者端）：唯一写视图属性的地方。
#[derive(Debug)]
pub(crate) struct UiLoop {
    consumer: QueueReactiveConsumer<UiEnvelope>,
    view: ViewState,
    hooks: ViewHooksContainer,
    /// 当前占用进度条的任务；其他任务的进度与文案一律丢弃
    bound_job: Option<JobId>,
    notification_duration: Duration,
}

impl UiLoop {
    pub(crate) fn new(
        consumer: QueueReactiveConsumer<UiEnvelope>,
        view: ViewState,
        hooks: ViewHooksContainer,
        notification_duration: Duration,
    ) -> Self {
        Self {
            consumer,
            view,
            hooks,
            bound_job: None,
            notification_duration,
        }
    }

    /// 逐条执行命令，直到收到 `Shutdown` 或所有句柄都被释放。
    pub(crate) async fn run(mut self) {
        log_thread("ui_loop");

        while let Some(UiEnvelope { command, ack }) = self.consumer.recv().await {
            if matches!(command, UiCommand::Shutdown) {
                self.consumer.close();
                // 关闭前仍在排队的命令不再执行，其确认随之丢弃
                let mut dropped = 0usize;
                while self.consumer.try_recv().is_some() {
                    dropped += 1;
                }
                self.hooks.run_on_teardown().await;
                tracing::debug!(dropped, "ui context shut down");
                if let Some(ack) = ack {
                    let _ = ack.send(());
                }
                return;
            }

            self.apply(command);
            if let Some(ack) = ack {
                let _ = ack.send(());
            }
        }
    }

    fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::SetText(text) => self.set_text(text),
            UiCommand::AppendLine(line) => {
                let text = format!("{}\n{}", self.view.text(), line);
                self.set_text(text);
            }
            UiCommand::SetButtonLabel(label) => self.set_button_label(label),
            UiCommand::BindJob { job, button_label } => {
                self.bound_job = Some(job);
                self.set_button_label(button_label);
                self.set_text(String::new());
                self.set_progress(0);
            }
            UiCommand::UnbindJob { job } => {
                if self.bound_job == Some(job) {
                    self.bound_job = None;
                }
            }
            UiCommand::SetProgress { job, value } => {
                if self.accepts(job) {
                    self.set_progress(value);
                }
            }
            UiCommand::PublishJobText { job, text } => {
                if self.accepts(job) {
                    self.set_text(text);
                }
            }
            UiCommand::Notify(message) => {
                let notification = Notification::new(message, self.notification_duration);
                let _ = self.view.notification.update(Some(notification.clone()));
                self.hooks.run_on_notification(&notification);
            }
            // run() 已单独处理
            UiCommand::Shutdown => {}
        }
    }

    fn accepts(&self, job: JobId) -> bool {
        let current = self.bound_job == Some(job);
        if !current {
            tracing::debug!(job = %job, bound = ?self.bound_job, "dropping publish from stale job");
        }
        current
    }

    fn set_text(&mut self, text: String) {
        log_thread("set_text");
        let _ = self.view.text.update(text.clone());
        self.hooks.run_on_text(&text);
    }

    fn set_progress(&mut self, value: u8) {
        let value = value.min(PROGRESS_CEILING);
        let _ = self.view.progress.update(value);
        self.hooks.run_on_progress(value);
    }

    fn set_button_label(&mut self, label: String) {
        let _ = self.view.button_label.update(label.clone());
        self.hooks.run_on_button_label(&label);
    }
}
