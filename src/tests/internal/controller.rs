//! 控制器级场景：两个流程交错、关闭与启动校验。

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::sleep;

use crate::config::ControllerConfig;
use crate::constants::SHUTDOWN_REASON;
use crate::job::JobStatus;
use crate::tests::{STEP_MS, init_tracing, start_recorded, start_recorded_with};
use crate::{ControllerError, FlowController, JobFlowState};

#[tokio::test(start_paused = true)]
async fn flows_interleave_but_keep_their_own_order() {
    let (controller, recorder) = start_recorded().unwrap();

    controller.trigger_fetch().unwrap();
    controller.trigger_job().await.unwrap();

    sleep(Duration::from_millis(13_001)).await;

    assert_eq!(
        recorder.texts(),
        vec![
            "",
            "Job is Complete",
            "Job is Complete\nResult #1",
            "Result #2"
        ]
    );
    let progress = recorder.progress();
    assert!(progress.windows(2).skip(1).all(|w| w[1] == w[0] + 1));
    assert_eq!(progress.last(), Some(&100));
    assert_eq!(controller.background_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_pending_publishes() {
    let (controller, recorder) = start_recorded().unwrap();

    controller.trigger_fetch().unwrap();
    controller.trigger_job().await.unwrap();
    let job = controller.current_job().await.unwrap();
    sleep(Duration::from_millis(STEP_MS * 10 + 10)).await;

    controller.shutdown().await.unwrap();
    assert_eq!(recorder.teardowns(), 1);
    assert_eq!(
        job.status().await,
        JobStatus::Cancelled {
            reason: SHUTDOWN_REASON.to_string()
        }
    );

    sleep(Duration::from_millis(20_000)).await;
    assert_eq!(controller.view().progress(), 10);
    assert_eq!(controller.view().text(), "");
    assert!(recorder.notifications().is_empty());
    assert_eq!(controller.background_tasks(), 0);

    // 重复关闭无副作用
    controller.shutdown().await.unwrap();
    assert_eq!(recorder.teardowns(), 1);
}

#[tokio::test(start_paused = true)]
async fn triggers_fail_after_shutdown() {
    let (controller, _recorder) = start_recorded().unwrap();
    controller.shutdown().await.unwrap();

    assert!(matches!(
        controller.trigger_fetch(),
        Err(ControllerError::ShutDown)
    ));
    assert!(matches!(
        controller.trigger_job().await,
        Err(ControllerError::ShutDown)
    ));
    assert!(matches!(
        controller.cancel_job("late").await,
        Err(ControllerError::ShutDown)
    ));
    assert_eq!(controller.job_state().await, JobFlowState::Idle);
}

#[test]
fn start_requires_runtime() {
    init_tracing();
    assert!(matches!(
        FlowController::start(ControllerConfig::default()),
        Err(ControllerError::NoRuntime)
    ));
}

#[tokio::test]
async fn start_rejects_invalid_config() {
    let config = ControllerConfig::default().with_progress_max(0);
    assert!(matches!(
        start_recorded_with(config),
        Err(ControllerError::InvalidConfig(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn closure_hooks_receive_view_changes() {
    init_tracing();
    let progress_calls = Arc::new(AtomicUsize::new(0));
    let teardowns = Arc::new(AtomicUsize::new(0));
    let texts = Arc::new(std::sync::Mutex::new(Vec::new()));

    let controller = FlowController::builder()
        .config(ControllerConfig::default().with_job_duration(100).with_progress_max(10))
        .with_progress_hook({
            let calls = progress_calls.clone();
            move |_: u8| {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        })
        .with_text_hook({
            let texts = texts.clone();
            move |text: &str| texts.lock().unwrap().push(text.to_string())
        })
        .with_teardown_hook({
            let teardowns = teardowns.clone();
            move || {
                let teardowns = teardowns.clone();
                async move {
                    teardowns.fetch_add(1, Ordering::SeqCst);
                }
            }
        })
        .start()
        .unwrap();

    controller.trigger_job().await.unwrap();
    sleep(Duration::from_millis(101)).await;

    // 绑定归零一次，再加 10 步
    assert_eq!(progress_calls.load(Ordering::SeqCst), 11);
    assert_eq!(texts.lock().unwrap().last().unwrap(), "Job is Complete");

    controller.shutdown().await.unwrap();
    assert_eq!(teardowns.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn view_watchers_observe_published_values() {
    let (controller, _recorder) = start_recorded().unwrap();
    let mut progress = controller.view().watch_progress();

    controller.trigger_job().await.unwrap();
    let reached = progress.wait_for(|p| *p >= 30).await.unwrap();
    assert!(reached >= 30);

    let json = serde_json::to_value(controller.view().snapshot()).unwrap();
    assert_eq!(json["button_label"], "Cancel Job #1");
    assert_eq!(json["notification"], serde_json::Value::Null);
}
