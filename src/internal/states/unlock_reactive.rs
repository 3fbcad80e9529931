//! # UnlockReactiveProperty
//!
//! 无锁视图属性：读写不阻塞，适合进度条这类高频刷新的值。
//!
//! ```rust,no_run
//! use async_ui_flows::states::unlock_reactive::UnlockReactiveProperty;
//!
//! let progress = UnlockReactiveProperty::new(0u8);
//! progress.update(42).unwrap();
//! assert_eq!(progress.get_or_default(), 42);
//! ```

pub use super::reactive_core::{PropertyWatcher, ReactivePropertyError as UnlockReactivePropertyError};

/// 无锁视图属性（无条件等待能力）。
///
/// 需要"等到某个状态为止"的强一致语义（例如任务状态机）时，请使用
/// [`LockReactiveProperty`](super::lock_reactive::LockReactiveProperty)。
pub type UnlockReactiveProperty<T> = super::reactive_core::ReactiveProperty<T>;
