//! 任务领域模块：可取消的单个后台工作单元及其终态。
//!
//! 对外导出以 [`crate::job`] 为准，此处仅做模块划分。

pub mod structs;
