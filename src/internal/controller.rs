//! 控制器领域模块：承载两个互不依赖的示例流程（顺序拉取、可取消任务）。
//!
//! 使用方式：`FlowController::builder().config(cfg).with_text_hook(..).start()?`
//! 对外导出以 crate 根为准，此处仅做模块划分。

pub mod structs;
