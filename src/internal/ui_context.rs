//! UI 上下文领域模块：唯一允许修改视图状态的串行执行上下文。
//!
//! 后台流程通过命令队列把"显示什么"交给 UI 上下文执行，自己从不直接写视图属性。
//! 对外导出以 [`crate::ui`] 为准，此处仅做模块划分。

pub mod functions;
pub mod structs;
pub mod traits;
