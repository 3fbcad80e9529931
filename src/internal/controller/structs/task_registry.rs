use std::future::Future;
use std::sync::{Mutex, PoisonError};

use tokio::task::JoinSet;
use tracing::Instrument;

/// 控制器拥有的后台任务集合。
///
/// 拉取流程、任务进度循环、完成监听器都登记在这里，
/// 控制器关闭或析构时统一中止，不会有任务比控制器活得更久。
#[derive(Debug, Default)]
pub(crate) struct TaskRegistry {
    tasks: Mutex<JoinSet<()>>,
}

impl TaskRegistry {
    /// 登记并启动一个后台任务；顺带回收已结束的任务。
    pub(crate) fn spawn<F>(&self, name: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        Self::reap(&mut tasks);
        tasks.spawn(task.instrument(tracing::debug_span!("background", task = name)));
        tracing::trace!(task = name, live = tasks.len(), "background task spawned");
    }

    /// 仍在运行的任务数。
    pub(crate) fn live(&self) -> usize {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        Self::reap(&mut tasks);
        tasks.len()
    }

    pub(crate) fn abort_all(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        let live = tasks.len();
        tasks.abort_all();
        Self::reap(&mut tasks);
        if live > 0 {
            tracing::debug!(live, "background tasks aborted");
        }
    }

    fn reap(tasks: &mut JoinSet<()>) {
        while let Some(finished) = tasks.try_join_next() {
            if let Err(e) = finished {
                if e.is_panic() {
                    tracing::warn!(error = %e, "background task panicked");
                }
            }
        }
    }
}
