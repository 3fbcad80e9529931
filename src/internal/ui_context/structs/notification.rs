use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// 短时通知：发出即忘，不需要确认，也不做持久化。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    /// 弹出时间
    pub shown_at: DateTime<Utc>,
    /// 显示时长
    pub duration: Duration,
}

impl Notification {
    pub(crate) fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Utc::now(),
            duration,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        let lifetime = TimeDelta::from_std(self.duration).unwrap_or(TimeDelta::zero());
        self.shown_at + lifetime
    }

    /// 渲染端据此决定是否还要继续显示。
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}
