//! # LockReactiveProperty
//!
//! 带条件等待与条件更新的响应式属性，基于 `tokio::sync::Mutex` + `Notify`。
//!
//! ## 与 UnlockReactiveProperty 的区别
//! - `UnlockReactiveProperty`：纯通知，读写不阻塞，可能合并中间值，适合视图属性。
//! - `LockReactiveProperty`：互斥锁保证强一致，`wait_until` 不会错过任何满足条件的时刻，
//!   `update_if` 可以原子地完成"检查当前状态再迁移"，适合任务状态机。
//!
//! ## 使用示例
//! ```rust,no_run
//! use async_ui_flows::states::lock_reactive::LockReactiveProperty;
//!
//! #[derive(Clone, PartialEq)]
//! enum Phase { Active, Done }
//!
//! # async fn example() {
//! let phase = LockReactiveProperty::new(Phase::Active);
//!
//! let p = phase.clone();
//! tokio::spawn(async move {
//!     // 只有 Active 才能迁移到 Done
//!     p.update_if(|cur| (*cur == Phase::Active).then_some(Phase::Done)).await;
//! });
//!
//! phase.wait_until(|p| *p == Phase::Done).await;
//! # }
//! ```

use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

struct Inner<T> {
    value: Mutex<T>,
    notify: Notify,
}

/// 带条件等待能力的响应式属性容器。
#[derive(Clone)]
pub struct LockReactiveProperty<T: Clone + Send + Sync> {
    inner: Arc<Inner<T>>,
}

impl<T> std::fmt::Debug for LockReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockReactiveProperty").finish_non_exhaustive()
    }
}

impl<T> LockReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(value),
                notify: Notify::new(),
            }),
        }
    }

    /// 无条件写入新值并唤醒所有等待者。
    pub async fn update(&self, new_value: T) {
        let mut guard = self.inner.value.lock().await;
        *guard = new_value;
        drop(guard);
        self.inner.notify.notify_waiters();
    }

    /// 条件更新：在持锁状态下用当前值计算下一个值。
    ///
    /// `transition` 返回 `None` 表示不迁移，此时不会唤醒等待者。
    /// 返回是否真的发生了迁移。
    pub async fn update_if<F>(&self, transition: F) -> bool
    where
        F: FnOnce(&T) -> Option<T>,
    {
        let mut guard = self.inner.value.lock().await;
        let Some(next) = transition(&*guard) else {
            return false;
        };
        *guard = next;
        drop(guard);
        self.inner.notify.notify_waiters();
        true
    }

    pub async fn get_current(&self) -> T {
        self.inner.value.lock().await.clone()
    }

    /// 挂起直到值满足 `predicate`，返回满足条件时的值；当前值已满足时立即返回。
    ///
    /// 先注册 `notified()` 再持锁检查，检查与等待之间的变化不会丢失。
    pub async fn wait_until<F>(&self, mut predicate: F) -> T
    where
        F: FnMut(&T) -> bool,
    {
        loop {
            let notified = self.inner.notify.notified();

            let guard = self.inner.value.lock().await;
            if predicate(&*guard) {
                return guard.clone();
            }
            // 立即释放锁，最小化持锁时间
            drop(guard);

            notified.await;
        }
    }
}
