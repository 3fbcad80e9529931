//! 视图状态：文本区、进度条、按钮文字、通知四个渲染面。
//!
//! 外部只能读取与监听；写入只发生在 UI 上下文里。

use serde::Serialize;

use crate::states::unlock_reactive::{PropertyWatcher, UnlockReactiveProperty};

use super::notification::Notification;

/// 进度上限。
pub const PROGRESS_CEILING: u8 = 100;

/// 视图状态句柄，克隆后共享同一组属性。
#[derive(Debug, Clone)]
pub struct ViewState {
    pub(crate) text: UnlockReactiveProperty<String>,
    pub(crate) progress: UnlockReactiveProperty<u8>,
    pub(crate) button_label: UnlockReactiveProperty<String>,
    pub(crate) notification: UnlockReactiveProperty<Option<Notification>>,
}

/// 某一时刻的视图快照。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub text: String,
    pub progress: u8,
    pub button_label: String,
    /// 最近一条通知（可能已过期，由渲染端判断）
    pub notification: Option<Notification>,
}

impl ViewState {
    pub(crate) fn new(initial_label: &str) -> Self {
        Self {
            text: UnlockReactiveProperty::new(String::new()),
            progress: UnlockReactiveProperty::new(0),
            button_label: UnlockReactiveProperty::new(initial_label.to_string()),
            notification: UnlockReactiveProperty::new(None),
        }
    }

    pub fn text(&self) -> String {
        self.text.get_or_default()
    }

    pub fn progress(&self) -> u8 {
        self.progress.get_or_default()
    }

    pub fn button_label(&self) -> String {
        self.button_label.get_or_default()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notification.get_current().flatten()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            text: self.text(),
            progress: self.progress(),
            button_label: self.button_label(),
            notification: self.notification(),
        }
    }

    pub fn watch_text(&self) -> PropertyWatcher<String> {
        self.text.watch()
    }

    pub fn watch_progress(&self) -> PropertyWatcher<u8> {
        self.progress.watch()
    }

    pub fn watch_button_label(&self) -> PropertyWatcher<String> {
        self.button_label.watch()
    }

    pub fn watch_notification(&self) -> PropertyWatcher<Option<Notification>> {
        self.notification.watch()
    }
}
