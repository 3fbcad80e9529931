/// 当前线程名；tokio 工作线程与测试线程都有名字，匿名线程显示为 `unnamed`。
pub(crate) fn current_thread_label() -> String {
    std::thread::current()
        .name()
        .unwrap_or("unnamed")
        .to_string()
}

/// 记录方法名与其所在的执行上下文，仅用于诊断。
pub(crate) fn log_thread(method: &str) {
    tracing::debug!(method, thread = %current_thread_label(), "execution context");
}
