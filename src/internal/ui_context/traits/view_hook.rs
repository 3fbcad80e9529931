//! 视图钩子：渲染端接入点。
//!
//! 所有回调都在 UI 上下文上、对应的视图变更生效之后调用，
//! 因此回调看到的顺序就是视图真实发生的顺序，不会合并中间值。

use async_trait::async_trait;

use crate::internal::ui_context::structs::notification::Notification;

/// 视图钩子：在「文本 / 进度 / 按钮文字 / 通知 / 关闭」时插入渲染逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用控制器构建器的 `with_text_hook` / `with_progress_hook` / `with_notification_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过 `with_hook` 注册。
#[async_trait]
pub trait ViewHook: Send + Sync {
    /// 文本区内容变化后调用。
    fn on_text_changed(&mut self, _text: &str) {}

    /// 进度值变化后调用，取值 0～100。
    fn on_progress_changed(&mut self, _progress: u8) {}

    /// 按钮文字变化后调用。
    fn on_button_label_changed(&mut self, _label: &str) {}

    /// 弹出一条短时通知。
    fn on_notification(&mut self, _notification: &Notification) {}

    /// 控制器关闭、UI 上下文退出前调用（释放渲染资源等）。
    async fn on_teardown(&mut self) {}
}
