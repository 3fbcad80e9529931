//! # QueueReactiveProperty：单消费者命令队列
//!
//! 基于 `tokio::sync::mpsc` 的 FIFO 队列，UI 上下文用它接收所有视图变更命令。
//!
//! ## 特性
//! - 多生产者（Clone sender），唯一消费者
//! - 严格 FIFO：同一生产者先发的命令一定先执行
//! - 维护积压深度，供上游判断 UI 上下文是否跟不上

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;

/// 命令队列（生产者端）
#[derive(Debug)]
pub(crate) struct QueueReactiveProperty<T: Send + 'static> {
    sender: mpsc::UnboundedSender<T>,
    depth: Arc<AtomicUsize>,
}

impl<T: Send + 'static> Clone for QueueReactiveProperty<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            depth: Arc::clone(&self.depth),
        }
    }
}

/// 命令队列（消费者端），不可 Clone。
#[derive(Debug)]
pub(crate) struct QueueReactiveConsumer<T: Send + 'static> {
    receiver: mpsc::UnboundedReceiver<T>,
    depth: Arc<AtomicUsize>,
}

impl<T> QueueReactiveProperty<T>
where
    T: Send + 'static,
{
    /// 返回 (生产者, 消费者)。
    pub(crate) fn new() -> (Self, QueueReactiveConsumer<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let depth = Arc::new(AtomicUsize::new(0));

        (
            Self {
                sender,
                depth: Arc::clone(&depth),
            },
            QueueReactiveConsumer { receiver, depth },
        )
    }

    /// 入队；消费者已关闭时原样退回命令。
    ///
    /// 成功时返回入队后的积压深度。
    pub(crate) fn send(&self, value: T) -> Result<usize, T> {
        let depth = self.depth.fetch_add(1, Ordering::AcqRel) + 1;
        self.sender.send(value).map_err(|e| {
            self.depth.fetch_sub(1, Ordering::AcqRel);
            e.0
        })?;
        Ok(depth)
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<T> QueueReactiveConsumer<T>
where
    T: Send + 'static,
{
    /// 接收下一条命令；所有生产者都释放后返回 `None`。
    pub(crate) async fn recv(&mut self) -> Option<T> {
        let value = self.receiver.recv().await;
        if value.is_some() {
            self.depth.fetch_sub(1, Ordering::AcqRel);
        }
        value
    }

    /// 停止接收：之后的 `send` 都会失败，已入队的命令仍可取出。
    pub(crate) fn close(&mut self) {
        self.receiver.close();
    }

    pub(crate) fn try_recv(&mut self) -> Option<T> {
        let value = self.receiver.try_recv().ok();
        if value.is_some() {
            self.depth.fetch_sub(1, Ordering::AcqRel);
        }
        value
    }
}
