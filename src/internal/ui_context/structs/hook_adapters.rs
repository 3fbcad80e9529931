//! 单阶段钩子适配器：将闭包包装成 [`ViewHook`]，供 `with_xx_hook` 使用。

use std::future::Future;

use async_trait::async_trait;

use crate::internal::ui_context::traits::view_hook::ViewHook;

use super::notification::Notification;

/// 仅实现「文本变化」的钩子适配器。
pub(crate) struct TextHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> ViewHook for TextHookAdapter<F>
where
    F: FnMut(&str) + Send + Sync + 'static,
{
    fn on_text_changed(&mut self, text: &str) {
        (self.0)(text);
    }
}

/// 仅实现「进度变化」的钩子适配器。
pub(crate) struct ProgressHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> ViewHook for ProgressHookAdapter<F>
where
    F: FnMut(u8) + Send + Sync + 'static,
{
    fn on_progress_changed(&mut self, progress: u8) {
        (self.0)(progress);
    }
}

/// 仅实现「通知」的钩子适配器。
pub(crate) struct NotificationHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> ViewHook for NotificationHookAdapter<F>
where
    F: FnMut(&Notification) + Send + Sync + 'static,
{
    fn on_notification(&mut self, notification: &Notification) {
        (self.0)(notification);
    }
}

/// 仅实现「关闭」的钩子适配器。
pub(crate) struct TeardownHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> ViewHook for TeardownHookAdapter<F>
where
    F: FnMut() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_teardown(&mut self) {
        (self.0)().await
    }
}
