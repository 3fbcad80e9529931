//! 可取消任务流程：一个按钮负责启动、取消并复位。
//!
//! ## 状态迁移
//! - `Idle` 触发：创建任务（进入 `Ready`）并立即启动（进入 `Running`）
//! - `Ready` 触发：启动
//! - `Running` 触发：视为"已在运行"，以 [`RESET_REASON`] 取消当前任务并复位到 `Ready`
//! - `Completed` / `Cancelled` 触发：复位到 `Ready`；从 `Completed` 复位时同样弹出 [`RESET_REASON`] 通知

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::internal::ui_context::structs::ui_command::UiCommand;
use crate::internal::ui_context::structs::ui_context::UiContext;
use crate::job::{Job, JobId, JobStatus};

use super::constants::{CANCEL_JOB_LABEL, JOB_COMPLETE_TEXT, RESET_REASON, START_JOB_LABEL};
use super::controller_config::ControllerConfig;
use super::controller_error::ControllerError;
use super::job_flow_state::JobFlowState;
use super::task_registry::TaskRegistry;

#[derive(Debug)]
pub(crate) struct JobFlow {
    ui: UiContext,
    tasks: Arc<TaskRegistry>,
    step: Duration,
    progress_max: u8,
    /// 当前任务；同一时刻至多一个
    current: Mutex<Option<Arc<Job>>>,
}

impl JobFlow {
    pub(crate) fn new(ui: UiContext, tasks: Arc<TaskRegistry>, config: &ControllerConfig) -> Self {
        Self {
            ui,
            tasks,
            step: config.job_step(),
            progress_max: config.progress_max,
            current: Mutex::new(None),
        }
    }

    pub(crate) async fn state(&self) -> JobFlowState {
        let current = self.current.lock().await;
        JobFlowState::of(current.as_deref()).await
    }

    pub(crate) async fn current_job(&self) -> Option<Arc<Job>> {
        self.current.lock().await.clone()
    }

    /// 按钮触发：根据当前状态启动或复位，返回触发后的状态。
    pub(crate) async fn trigger(&self) -> Result<JobFlowState, ControllerError> {
        let mut current = self.current.lock().await;

        match JobFlowState::of(current.as_deref()).await {
            JobFlowState::Idle => {
                let job = self.init_job(&mut current).await?;
                self.start_job(job).await?;
            }
            JobFlowState::Ready => {
                if let Some(job) = current.clone() {
                    self.start_job(job).await?;
                }
            }
            JobFlowState::Running => {
                if let Some(job) = current.as_ref() {
                    tracing::info!(job = %job.id(), "job is already active, cancelling");
                }
                self.reset_job(&mut current).await?;
            }
            JobFlowState::Completed | JobFlowState::Cancelled => {
                self.reset_job(&mut current).await?;
            }
        }

        Ok(JobFlowState::of(current.as_deref()).await)
    }

    /// 外部取消当前任务；没有任务或任务已结束时返回 `false`。
    ///
    /// 返回前已在 UI 上下文解绑该任务，之后它的进度与文案都不会再生效。
    pub(crate) async fn cancel(&self, reason: &str) -> Result<bool, ControllerError> {
        let current = self.current.lock().await;
        let Some(job) = current.as_ref() else {
            return Ok(false);
        };
        if !job.cancel(reason).await {
            return Ok(false);
        }
        self.ui.run(UiCommand::UnbindJob { job: job.id() }).await?;
        Ok(true)
    }

    /// 创建新任务、把视图交给它，并挂上完成监听器。
    async fn init_job(&self, slot: &mut Option<Arc<Job>>) -> Result<Arc<Job>, ControllerError> {
        let job = Arc::new(Job::new());

        self.ui
            .run(UiCommand::BindJob {
                job: job.id(),
                button_label: START_JOB_LABEL.to_string(),
            })
            .await?;

        self.observe_completion(&job);
        *slot = Some(Arc::clone(&job));
        tracing::debug!(job = %job.id(), "job ready");
        Ok(job)
    }

    async fn start_job(&self, job: Arc<Job>) -> Result<(), ControllerError> {
        if !job.activate().await {
            return Ok(());
        }

        self.ui
            .run(UiCommand::SetButtonLabel(CANCEL_JOB_LABEL.to_string()))
            .await?;
        tracing::info!(job = %job.id(), step_ms = self.step.as_millis() as u64, "job started");

        self.tasks.spawn(
            "job_progress",
            drive_progress(job, self.ui.clone(), self.step, self.progress_max),
        );
        Ok(())
    }

    async fn reset_job(&self, slot: &mut Option<Arc<Job>>) -> Result<(), ControllerError> {
        if let Some(job) = slot.take() {
            let cancelled = job.cancel(RESET_REASON).await;
            // 已完成的任务仍占着进度条，复位它同样要提示
            if !cancelled && job.status().await == JobStatus::Completed {
                tracing::info!(job = %job.id(), reason = RESET_REASON, "completed job reset");
                self.ui.post(UiCommand::Notify(RESET_REASON.to_string()))?;
            }
        }
        self.init_job(slot).await.map(|_| ())
    }

    /// 终态为取消时弹出通知；空白原因替换为默认文案。
    fn observe_completion(&self, job: &Arc<Job>) {
        let job = Arc::clone(job);
        let ui = self.ui.clone();

        self.tasks.spawn("job_completion_observer", async move {
            let outcome = job.outcome().await;
            let Some(message) = outcome.notification_text() else {
                return;
            };
            tracing::info!(job = %job.id(), reason = %message, "job was cancelled");
            if let Err(e) = ui.post(UiCommand::Notify(message)) {
                tracing::debug!(job = %job.id(), error = %e, "cancellation notice not shown");
            }
        });
    }
}

/// 任务进度循环：每一步先等待固定间隔，再把进度交给 UI 上下文。
///
/// 任务被取消时在下一个等待点退出，之后不会再发布任何东西。
async fn drive_progress(job: Arc<Job>, ui: UiContext, step: Duration, progress_max: u8) {
    let id: JobId = job.id();

    for value in 1..=progress_max {
        tokio::select! {
            biased;

            _ = job.cancelled() => {
                tracing::debug!(job = %id, progress = value - 1, "job loop stopped");
                return;
            }
            _ = tokio::time::sleep(step) => {}
        }

        if ui.run(UiCommand::SetProgress { job: id, value }).await.is_err() {
            return;
        }
    }

    if !job.complete().await {
        return;
    }

    tracing::info!(job = %id, "job completed");
    if let Err(e) = ui
        .run(UiCommand::PublishJobText {
            job: id,
            text: JOB_COMPLETE_TEXT.to_string(),
        })
        .await
    {
        tracing::debug!(job = %id, error = %e, "completion text not published");
    }
}
