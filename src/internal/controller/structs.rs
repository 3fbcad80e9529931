pub mod constants;
pub mod controller_builder;
pub mod controller_config;
pub mod controller_error;
pub mod fetch_flow;
pub mod flow_controller;
pub mod job_flow;
pub mod job_flow_state;
pub mod task_registry;

// 重导出公共类型
pub use controller_builder::FlowControllerBuilder;
pub use controller_config::ControllerConfig;
pub use controller_error::ControllerError;
pub use flow_controller::FlowController;
pub use job_flow_state::JobFlowState;
