//! # ReactiveProperty：视图属性内核
//!
//! 基于 [`tokio::sync::watch`] 的"最后写入者胜出"属性：
//! 文本区、进度条、按钮文字、通知都用它承载，渲染端只读监听。
//!
//! 写入方只有 UI 上下文（见 `ui_context`），因此这里不做写写协调。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

// ──────────────────────────── Error ────────────────────────────

/// 响应式属性错误
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 监听器对应的属性已被释放
    #[error("监听器已失效，属性已被释放")]
    WatcherClosed,

    /// 属性已被销毁
    #[error("属性已被销毁")]
    Destroyed,

    /// watch 通道接收失败
    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

// ──────────────────────────── Inner ────────────────────────────

#[derive(Debug)]
pub(crate) struct Inner<T> {
    pub(crate) sender: watch::Sender<Option<T>>,
    pub(crate) is_dropped: AtomicBool,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        self.is_dropped.store(true, Ordering::Relaxed);
        // 推送 None，让仍在等待的监听器退出
        let _ = self.sender.send(None);
    }
}

// ──────────────────────────── ReactiveProperty ────────────────────────────

/// 响应式属性：克隆后共享同一份值。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    pub(crate) inner: Arc<Inner<T>>,
    pub(crate) cache_receiver: watch::Receiver<Option<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(value: T) -> Self {
        let (sender, cache_receiver) = watch::channel(Some(value));
        Self {
            inner: Arc::new(Inner {
                sender,
                is_dropped: AtomicBool::new(false),
            }),
            cache_receiver,
        }
    }

    /// 覆盖写入新值并通知所有监听者。
    pub fn update(&self, new_value: T) -> Result<&Self, ReactivePropertyError> {
        if self.inner.is_dropped.load(Ordering::Relaxed) {
            return Err(ReactivePropertyError::Destroyed);
        }
        // 没有监听者时 send 会失败，但值仍需写入
        self.inner.sender.send_replace(Some(new_value));
        Ok(self)
    }

    /// 基于当前值就地修改，返回闭包的结果。
    pub fn update_field<F, R>(&self, updater: F) -> Result<R, ReactivePropertyError>
    where
        F: FnOnce(&mut T) -> R,
    {
        if self.inner.is_dropped.load(Ordering::Relaxed) {
            return Err(ReactivePropertyError::Destroyed);
        }

        let mut current = self
            .cache_receiver
            .borrow()
            .clone()
            .ok_or(ReactivePropertyError::Destroyed)?;

        let out = updater(&mut current);
        self.inner.sender.send_replace(Some(current));
        Ok(out)
    }

    /// 当前值的快照。
    pub fn get_current(&self) -> Option<T> {
        self.cache_receiver.borrow().as_ref().cloned()
    }

    /// 当前值；属性已释放时返回默认值。
    pub fn get_or_default(&self) -> T
    where
        T: Default,
    {
        self.get_current().unwrap_or_default()
    }

    /// 创建一个监听器，用于异步接收后续变化。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.inner.sender.subscribe(),
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

/// 属性监听器。
///
/// 只保证拿到"最新值"，快速连续的中间值可能被合并；
/// 需要逐个观察每一次变化时请改用视图钩子。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 等待下一次变化并返回新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        match self.receiver.borrow_and_update().as_ref() {
            None => Err(ReactivePropertyError::WatcherClosed),
            Some(value) => Ok(value.clone()),
        }
    }

    /// 等待直到当前值满足条件；已满足时立即返回。
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Result<T, ReactivePropertyError>
    where
        F: FnMut(&T) -> bool,
    {
        loop {
            match self.receiver.borrow_and_update().as_ref() {
                None => return Err(ReactivePropertyError::WatcherClosed),
                Some(value) if predicate(value) => return Ok(value.clone()),
                Some(_) => {}
            }
            self.receiver.changed().await?;
        }
    }

    pub fn borrow(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }
}
