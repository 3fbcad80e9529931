use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::controller_error::ControllerError;
use crate::ui::PROGRESS_CEILING;

/// 第一次模拟请求的延迟：10 个时间单位（毫秒）
pub const DEFAULT_FIRST_FETCH_DELAY_MS: u64 = 10_000;

/// 第二次模拟请求的延迟：3 个时间单位（毫秒）
pub const DEFAULT_SECOND_FETCH_DELAY_MS: u64 = 3_000;

/// 任务从 0 跑到满的总时长（毫秒）
pub const DEFAULT_JOB_DURATION_MS: u64 = 4_000;

/// 进度步数，同时也是进度上限
pub const DEFAULT_PROGRESS_MAX: u8 = 100;

/// 短时通知的显示时长（毫秒）
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 2_000;

/// UI 命令积压超过该深度时打印告警
pub const DEFAULT_UI_QUEUE_WARN_DEPTH: usize = 64;

/// 控制器配置。
///
/// 可直接从任意 serde 格式反序列化，缺省字段取默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub first_fetch_delay_ms: u64,
    pub second_fetch_delay_ms: u64,
    pub job_duration_ms: u64,
    /// 进度步数（1～100）
    pub progress_max: u8,
    pub notification_duration_ms: u64,
    pub ui_queue_warn_depth: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            first_fetch_delay_ms: DEFAULT_FIRST_FETCH_DELAY_MS,
            second_fetch_delay_ms: DEFAULT_SECOND_FETCH_DELAY_MS,
            job_duration_ms: DEFAULT_JOB_DURATION_MS,
            progress_max: DEFAULT_PROGRESS_MAX,
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            ui_queue_warn_depth: DEFAULT_UI_QUEUE_WARN_DEPTH,
        }
    }
}

impl ControllerConfig {
    /// 设置两次模拟请求的延迟（毫秒）
    pub fn with_fetch_delays(mut self, first_ms: u64, second_ms: u64) -> Self {
        self.first_fetch_delay_ms = first_ms;
        self.second_fetch_delay_ms = second_ms;
        self
    }

    /// 设置任务总时长（毫秒）
    pub fn with_job_duration(mut self, duration_ms: u64) -> Self {
        self.job_duration_ms = duration_ms;
        self
    }

    pub fn with_progress_max(mut self, progress_max: u8) -> Self {
        self.progress_max = progress_max;
        self
    }

    pub fn with_notification_duration(mut self, duration_ms: u64) -> Self {
        self.notification_duration_ms = duration_ms;
        self
    }

    pub fn first_fetch_delay(&self) -> Duration {
        Duration::from_millis(self.first_fetch_delay_ms)
    }

    pub fn second_fetch_delay(&self) -> Duration {
        Duration::from_millis(self.second_fetch_delay_ms)
    }

    pub fn job_duration(&self) -> Duration {
        Duration::from_millis(self.job_duration_ms)
    }

    /// 每一步之间的间隔：总时长 ÷ 步数。
    pub fn job_step(&self) -> Duration {
        self.job_duration() / u32::from(self.progress_max.max(1))
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    /// 校验配置，启动控制器前自动调用。
    pub fn validate(&self) -> Result<(), ControllerError> {
        if self.progress_max == 0 || self.progress_max > PROGRESS_CEILING {
            return Err(ControllerError::InvalidConfig(format!(
                "progress_max 必须在 1～{} 之间，当前为 {}",
                PROGRESS_CEILING, self.progress_max
            )));
        }
        if self.job_duration_ms < u64::from(self.progress_max) {
            return Err(ControllerError::InvalidConfig(format!(
                "job_duration_ms ({}) 小于步数 ({})，单步间隔会变成 0",
                self.job_duration_ms, self.progress_max
            )));
        }
        Ok(())
    }
}
