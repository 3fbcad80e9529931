//! 可取消任务流程：启动、完成、复位与取消通知。
//!
//! 默认配置下单步间隔为 [`STEP_MS`]，断言时间点都避开步进边界。

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::JobFlowState;
use crate::constants::{CANCEL_JOB_LABEL, JOB_COMPLETE_TEXT, RESET_REASON, START_JOB_LABEL};
use crate::job::DEFAULT_CANCEL_REASON;
use crate::tests::{STEP_MS, start_recorded};

fn steps(n: u64) -> Duration {
    Duration::from_millis(STEP_MS * n)
}

#[tokio::test(start_paused = true)]
async fn job_runs_to_completion() {
    let (controller, recorder) = start_recorded().unwrap();
    assert_eq!(controller.job_state().await, JobFlowState::Idle);

    assert_eq!(controller.trigger_job().await.unwrap(), JobFlowState::Running);
    assert_eq!(controller.view().button_label(), CANCEL_JOB_LABEL);

    sleep(steps(50) + Duration::from_millis(10)).await;
    assert_eq!(controller.view().progress(), 50);
    assert_eq!(controller.view().text(), "");

    sleep(steps(50)).await;
    assert_eq!(controller.view().progress(), 100);
    assert_eq!(controller.view().text(), JOB_COMPLETE_TEXT);
    assert_eq!(controller.job_state().await, JobFlowState::Completed);

    // 绑定时归零一次，之后逐步递增
    let expected: Vec<u8> = std::iter::once(0).chain(1..=100).collect();
    assert_eq!(recorder.progress(), expected);
    assert_eq!(
        recorder
            .texts()
            .iter()
            .filter(|t| t.as_str() == JOB_COMPLETE_TEXT)
            .count(),
        1
    );
    assert!(recorder.notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn rapid_retrigger_resets_to_ready() {
    let (controller, recorder) = start_recorded().unwrap();

    controller.trigger_job().await.unwrap();
    let first = controller.current_job().await.unwrap();

    sleep(steps(5) + Duration::from_millis(10)).await;
    assert_eq!(controller.view().progress(), 5);

    assert_eq!(controller.trigger_job().await.unwrap(), JobFlowState::Ready);
    let second = controller.current_job().await.unwrap();
    assert_ne!(first.id(), second.id());

    let view = controller.view().snapshot();
    assert_eq!(view.progress, 0);
    assert_eq!(view.button_label, START_JOB_LABEL);

    sleep(Duration::from_millis(1)).await;
    assert_eq!(recorder.notifications(), vec![RESET_REASON]);

    // 旧循环不会再推进进度
    sleep(steps(200)).await;
    assert_eq!(controller.view().progress(), 0);
    assert_eq!(recorder.progress(), vec![0, 1, 2, 3, 4, 5, 0]);
    assert_eq!(controller.job_state().await, JobFlowState::Ready);
}

#[tokio::test(start_paused = true)]
async fn reset_at_random_point_stops_old_loop() {
    let (controller, recorder) = start_recorded().unwrap();
    let reset_at: u8 = rand::thread_rng().gen_range(1..100);

    controller.trigger_job().await.unwrap();
    sleep(steps(u64::from(reset_at)) + Duration::from_millis(20)).await;
    assert_eq!(controller.view().progress(), reset_at);

    controller.trigger_job().await.unwrap();
    sleep(steps(150)).await;

    let expected: Vec<u8> = std::iter::once(0)
        .chain(1..=reset_at)
        .chain(std::iter::once(0))
        .collect();
    assert_eq!(recorder.progress(), expected, "reset at step {reset_at}");
    assert_ne!(controller.view().text(), JOB_COMPLETE_TEXT);

    // 复位后的任务仍可正常跑完
    assert_eq!(controller.trigger_job().await.unwrap(), JobFlowState::Running);
    sleep(steps(100) + Duration::from_millis(1)).await;
    assert_eq!(controller.view().progress(), 100);
    assert_eq!(controller.view().text(), JOB_COMPLETE_TEXT);
    assert_eq!(controller.job_state().await, JobFlowState::Completed);
}

#[tokio::test(start_paused = true)]
async fn blank_cancel_reason_shows_default_message() {
    let (controller, recorder) = start_recorded().unwrap();

    controller.trigger_job().await.unwrap();
    sleep(steps(3) + Duration::from_millis(10)).await;

    assert!(controller.cancel_job("   ").await.unwrap());
    sleep(Duration::from_millis(1)).await;

    assert_eq!(recorder.notifications(), vec![DEFAULT_CANCEL_REASON]);
    assert_eq!(controller.job_state().await, JobFlowState::Cancelled);

    // 进度停在取消时的位置
    sleep(steps(10)).await;
    assert_eq!(controller.view().progress(), 3);
    assert!(!controller.cancel_job("again").await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn cancel_reason_is_shown_verbatim() {
    let (controller, recorder) = start_recorded().unwrap();

    controller.trigger_job().await.unwrap();
    sleep(steps(1) + Duration::from_millis(10)).await;
    controller.cancel_job("User pressed stop").await.unwrap();
    sleep(Duration::from_millis(1)).await;

    let notification = controller.view().notification().unwrap();
    assert_eq!(notification.message, "User pressed stop");
    assert_eq!(recorder.notifications(), vec!["User pressed stop"]);
}

#[tokio::test(start_paused = true)]
async fn cancel_without_job_is_noop() {
    let (controller, recorder) = start_recorded().unwrap();
    assert!(!controller.cancel_job("nothing").await.unwrap());
    sleep(Duration::from_millis(1)).await;
    assert!(recorder.notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn retrigger_after_terminal_state_goes_to_ready() {
    let (controller, recorder) = start_recorded().unwrap();

    controller.trigger_job().await.unwrap();
    sleep(steps(100) + Duration::from_millis(1)).await;
    assert_eq!(controller.job_state().await, JobFlowState::Completed);

    assert_eq!(controller.trigger_job().await.unwrap(), JobFlowState::Ready);
    sleep(Duration::from_millis(1)).await;
    let view = controller.view().snapshot();
    assert_eq!(view.text, "");
    assert_eq!(view.progress, 0);
    assert_eq!(view.button_label, START_JOB_LABEL);
    // 复位已完成的任务同样提示复位原因
    assert_eq!(recorder.notifications(), vec![RESET_REASON]);

    assert_eq!(controller.trigger_job().await.unwrap(), JobFlowState::Running);
    sleep(steps(2) + Duration::from_millis(10)).await;
    controller.cancel_job("stop").await.unwrap();
    assert_eq!(controller.job_state().await, JobFlowState::Cancelled);

    assert_eq!(controller.trigger_job().await.unwrap(), JobFlowState::Ready);
    sleep(Duration::from_millis(1)).await;
    // 已取消的任务不会重复提示
    assert_eq!(recorder.notifications(), vec![RESET_REASON, "stop"]);
}

#[tokio::test(start_paused = true)]
async fn completed_job_reset_notifies_once_per_reset() {
    let (controller, recorder) = start_recorded().unwrap();

    controller.trigger_job().await.unwrap();
    sleep(steps(100) + Duration::from_millis(1)).await;
    assert_eq!(controller.view().text(), JOB_COMPLETE_TEXT);

    assert_eq!(controller.trigger_job().await.unwrap(), JobFlowState::Ready);
    sleep(Duration::from_millis(5)).await;
    assert_eq!(recorder.notifications(), vec![RESET_REASON]);
    assert_eq!(controller.view().notification().unwrap().message, RESET_REASON);

    // Ready 状态下再次触发只是启动，不复位
    assert_eq!(controller.trigger_job().await.unwrap(), JobFlowState::Running);
    sleep(Duration::from_millis(5)).await;
    assert_eq!(recorder.notifications(), vec![RESET_REASON]);
}

#[tokio::test(start_paused = true)]
async fn cancelled_job_no_longer_moves_progress() {
    let (controller, recorder) = start_recorded().unwrap();

    controller.trigger_job().await.unwrap();
    // 恰好落在步进边界上：本步的等待与取消同时就绪
    sleep(steps(4)).await;
    assert!(controller.cancel_job("stop").await.unwrap());
    let frozen = controller.view().progress();
    let published = recorder.progress().len();

    sleep(steps(20)).await;
    assert_eq!(controller.view().progress(), frozen);
    assert_eq!(recorder.progress().len(), published);
    assert_ne!(controller.view().text(), JOB_COMPLETE_TEXT);
}
