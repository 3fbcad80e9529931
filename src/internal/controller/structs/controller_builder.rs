use std::future::Future;

use crate::internal::ui_context::structs::hook_adapters::{
    NotificationHookAdapter, ProgressHookAdapter, TeardownHookAdapter, TextHookAdapter,
};
use crate::ui::{Notification, ViewHook, ViewHooksContainer};

use super::controller_config::ControllerConfig;
use super::controller_error::ControllerError;
use super::flow_controller::FlowController;

/// 控制器构建器：钩子必须在启动前注册，启动后视图钩子归 UI 上下文独占。
#[derive(Debug, Default)]
pub struct FlowControllerBuilder {
    config: ControllerConfig,
    hooks: ViewHooksContainer,
}

impl FlowControllerBuilder {
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// 注册完整的视图钩子；可多次调用，按注册顺序执行。
    pub fn with_hook(mut self, hook: impl ViewHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    pub fn with_text_hook<F>(self, f: F) -> Self
    where
        F: FnMut(&str) + Send + Sync + 'static,
    {
        self.with_hook(TextHookAdapter(f))
    }

    pub fn with_progress_hook<F>(self, f: F) -> Self
    where
        F: FnMut(u8) + Send + Sync + 'static,
    {
        self.with_hook(ProgressHookAdapter(f))
    }

    pub fn with_notification_hook<F>(self, f: F) -> Self
    where
        F: FnMut(&Notification) + Send + Sync + 'static,
    {
        self.with_hook(NotificationHookAdapter(f))
    }

    pub fn with_teardown_hook<F, Fut>(self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.with_hook(TeardownHookAdapter(f))
    }

    /// 校验配置并启动控制器；必须在 tokio 运行时内调用。
    pub fn start(self) -> Result<FlowController, ControllerError> {
        self.config.validate()?;
        FlowController::launch(self.config, self.hooks)
    }
}
