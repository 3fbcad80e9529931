//! 响应式属性并发测试
//!
//! 测试项：
//! - wait_until() 在快速更新场景下不会错过通知
//! - 多个等待者同时等待时的正确性
//! - update_if() 在竞争下只有一个赢家（任务状态机依赖这一点）

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::timeout;

use crate::states::lock_reactive::LockReactiveProperty;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn wait_until_does_not_miss_rapid_updates() {
    let prop = Arc::new(LockReactiveProperty::new(0i32));
    let p = Arc::clone(&prop);

    tokio::spawn(async move {
        for i in 1..=100 {
            p.update(i).await;
        }
    });

    let result = timeout(Duration::from_secs(5), prop.wait_until(|v| *v == 100)).await;
    assert!(result.is_ok(), "wait_until 应该能捕获到快速更新的值");
    assert_eq!(prop.get_current().await, 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn multiple_waiters_all_notified() {
    let prop = Arc::new(LockReactiveProperty::new(0i32));
    let success_count = Arc::new(AtomicU32::new(0));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let p = Arc::clone(&prop);
        let count = Arc::clone(&success_count);
        handles.push(tokio::spawn(async move {
            p.wait_until(|v| *v == 42).await;
            count.fetch_add(1, Ordering::Relaxed);
        }));
    }

    tokio::time::sleep(Duration::from_millis(50)).await;
    prop.update(42).await;

    for h in handles {
        timeout(Duration::from_secs(1), h)
            .await
            .expect("等待者应该被唤醒")
            .unwrap();
    }
    assert_eq!(success_count.load(Ordering::Relaxed), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn update_if_has_single_winner_under_contention() {
    let prop = Arc::new(LockReactiveProperty::new(0i32));
    let winners = Arc::new(AtomicU32::new(0));

    let mut handles = Vec::new();
    for i in 1..=20 {
        let p = Arc::clone(&prop);
        let w = Arc::clone(&winners);
        handles.push(tokio::spawn(async move {
            if p.update_if(|v| (*v == 0).then_some(i)).await {
                w.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    for h in handles {
        h.await.unwrap();
    }

    assert_eq!(winners.load(Ordering::Relaxed), 1, "只有第一个迁移应成功");
    assert_ne!(prop.get_current().await, 0);
}
