//! 顺序拉取流程：两次模拟请求先后执行，每个结果都切回 UI 上下文发布。

use std::time::Duration;

use crate::internal::ui_context::functions::log_thread::log_thread;
use crate::internal::ui_context::structs::ui_command::UiCommand;
use crate::internal::ui_context::structs::ui_context::UiContext;
use crate::ui::UiContextError;

use super::constants::{RESULT_1, RESULT_2};
use super::controller_config::ControllerConfig;

#[derive(Debug, Clone)]
pub(crate) struct FetchFlow {
    ui: UiContext,
    first_delay: Duration,
    second_delay: Duration,
}

impl FetchFlow {
    pub(crate) fn new(ui: UiContext, config: &ControllerConfig) -> Self {
        Self {
            ui,
            first_delay: config.first_fetch_delay(),
            second_delay: config.second_fetch_delay(),
        }
    }

    /// 结果 A 追加到现有文本之后，结果 B 覆盖整个文本。
    ///
    /// 严格顺序执行，A 的发布一定早于 B；中途被中止时剩余步骤直接不执行。
    pub(crate) async fn run(&self) -> Result<(), UiContextError> {
        log_thread("fetch_flow");

        let result = self.fetch_first_result().await;
        self.publish(UiCommand::AppendLine(result)).await?;

        let result = self.fetch_second_result().await;
        self.publish(UiCommand::SetText(result)).await
    }

    async fn fetch_first_result(&self) -> String {
        log_thread("fetch_first_result");
        tokio::time::sleep(self.first_delay).await;
        RESULT_1.to_string()
    }

    async fn fetch_second_result(&self) -> String {
        log_thread("fetch_second_result");
        tokio::time::sleep(self.second_delay).await;
        RESULT_2.to_string()
    }

    async fn publish(&self, command: UiCommand) -> Result<(), UiContextError> {
        log_thread("publish_on_ui_context");
        self.ui.run(command).await
    }
}
