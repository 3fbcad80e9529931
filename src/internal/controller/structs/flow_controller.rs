use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::internal::ui_context::structs::ui_command::UiCommand;
use crate::internal::ui_context::structs::ui_context::UiContext;
use crate::job::Job;
use crate::ui::{ViewHooksContainer, ViewState};

use super::constants::{SHUTDOWN_REASON, START_JOB_LABEL};
use super::controller_builder::FlowControllerBuilder;
use super::controller_config::ControllerConfig;
use super::controller_error::ControllerError;
use super::fetch_flow::FetchFlow;
use super::job_flow::JobFlow;
use super::job_flow_state::JobFlowState;
use super::task_registry::TaskRegistry;

/// 示例流程控制器：两个按钮分别触发顺序拉取流程与可取消任务流程。
///
/// 控制器拥有 UI 上下文与所有后台任务，调用 [`shutdown`](Self::shutdown)
/// 或析构时一并结束。
#[derive(Debug)]
pub struct FlowController {
    config: ControllerConfig,
    view: ViewState,
    ui: UiContext,
    fetch_flow: FetchFlow,
    job_flow: JobFlow,
    tasks: Arc<TaskRegistry>,
    ui_loop: Mutex<Option<JoinHandle<()>>>,
    is_shut_down: AtomicBool,
}

/// 内部实现
impl FlowController {
    pub fn builder() -> FlowControllerBuilder {
        FlowControllerBuilder::default()
    }

    /// 使用给定配置、不带钩子启动。
    pub fn start(config: ControllerConfig) -> Result<Self, ControllerError> {
        Self::builder().config(config).start()
    }

    pub(crate) fn launch(
        config: ControllerConfig,
        hooks: ViewHooksContainer,
    ) -> Result<Self, ControllerError> {
        let runtime = Handle::try_current().map_err(|_| ControllerError::NoRuntime)?;

        let view = ViewState::new(START_JOB_LABEL);
        let (ui, ui_loop) = UiContext::new(view.clone(), hooks, &config);
        let ui_loop = runtime.spawn(ui_loop.run().instrument(tracing::debug_span!("ui_context")));

        let tasks = Arc::new(TaskRegistry::default());
        let fetch_flow = FetchFlow::new(ui.clone(), &config);
        let job_flow = JobFlow::new(ui.clone(), Arc::clone(&tasks), &config);

        tracing::debug!(?config, "flow controller started");

        Ok(Self {
            config,
            view,
            ui,
            fetch_flow,
            job_flow,
            tasks,
            ui_loop: Mutex::new(Some(ui_loop)),
            is_shut_down: AtomicBool::new(false),
        })
    }

    fn ensure_running(&self) -> Result<(), ControllerError> {
        if self.is_shut_down.load(Ordering::SeqCst) || self.ui.is_closed() {
            return Err(ControllerError::ShutDown);
        }
        Ok(())
    }
}

/// 外部接口：按钮触发与状态读取
impl FlowController {
    /// 按钮 1：在后台启动一次顺序拉取流程，立即返回。
    pub fn trigger_fetch(&self) -> Result<(), ControllerError> {
        self.ensure_running()?;

        let flow = self.fetch_flow.clone();
        self.tasks.spawn("fetch_flow", async move {
            if let Err(e) = flow.run().await {
                tracing::debug!(error = %e, "fetch flow ended before publishing");
            }
        });
        Ok(())
    }

    /// 按钮 2：启动、或取消并复位任务流程，返回触发后的状态。
    pub async fn trigger_job(&self) -> Result<JobFlowState, ControllerError> {
        self.ensure_running()?;
        self.job_flow.trigger().await
    }

    /// 以给定原因取消当前任务；返回是否真的取消了一个未结束的任务。
    pub async fn cancel_job(&self, reason: &str) -> Result<bool, ControllerError> {
        self.ensure_running()?;
        self.job_flow.cancel(reason).await
    }

    pub async fn job_state(&self) -> JobFlowState {
        self.job_flow.state().await
    }

    pub async fn current_job(&self) -> Option<Arc<Job>> {
        self.job_flow.current_job().await
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// 仍在运行的后台任务数（不含 UI 上下文本身）。
    pub fn background_tasks(&self) -> usize {
        self.tasks.live()
    }
}

/// 生命周期
impl FlowController {
    /// 关闭控制器：中止所有后台任务，取消当前任务，执行关闭钩子后退出 UI 上下文。
    ///
    /// 重复调用是安全的，第二次起直接返回。
    pub async fn shutdown(&self) -> Result<(), ControllerError> {
        if self.is_shut_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        self.tasks.abort_all();
        if let Err(e) = self.job_flow.cancel(SHUTDOWN_REASON).await {
            tracing::debug!(error = %e, "current job not unbound at shutdown");
        }

        let ui_loop = self
            .ui_loop
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if self.ui.run(UiCommand::Shutdown).await.is_err() {
            tracing::debug!("ui context already gone at shutdown");
        }
        if let Some(handle) = ui_loop {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "ui context ended abnormally");
            }
        }

        tracing::info!("flow controller shut down");
        Ok(())
    }
}

impl Drop for FlowController {
    fn drop(&mut self) {
        self.tasks.abort_all();
        if let Some(handle) = self
            .ui_loop
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }
}
