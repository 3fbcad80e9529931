use std::fmt;

use crate::internal::ui_context::traits::view_hook::ViewHook;

use super::notification::Notification;

/// 钩子容器：按注册顺序依次执行。
#[derive(Default)]
pub struct ViewHooksContainer {
    hooks: Vec<Box<dyn ViewHook>>,
}

impl fmt::Debug for ViewHooksContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewHooksContainer")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl ViewHooksContainer {
    /// 添加一个视图钩子；可多次调用。
    pub fn add(&mut self, hook: impl ViewHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub(crate) fn run_on_text(&mut self, text: &str) {
        for h in self.hooks.iter_mut() {
            h.on_text_changed(text);
        }
    }

    pub(crate) fn run_on_progress(&mut self, progress: u8) {
        for h in self.hooks.iter_mut() {
            h.on_progress_changed(progress);
        }
    }

    pub(crate) fn run_on_button_label(&mut self, label: &str) {
        for h in self.hooks.iter_mut() {
            h.on_button_label_changed(label);
        }
    }

    pub(crate) fn run_on_notification(&mut self, notification: &Notification) {
        for h in self.hooks.iter_mut() {
            h.on_notification(notification);
        }
    }

    pub(crate) async fn run_on_teardown(&mut self) {
        for h in self.hooks.iter_mut() {
            h.on_teardown().await;
        }
    }
}
