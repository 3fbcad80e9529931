pub mod hook_adapters;
pub mod notification;
pub mod ui_command;
pub mod ui_context;
pub mod ui_context_error;
pub mod ui_loop;
pub mod view_hooks_container;
pub mod view_state;

// 重导出公共类型
pub use notification::Notification;
pub use ui_context_error::UiContextError;
pub use view_hooks_container::ViewHooksContainer;
pub use view_state::{ViewSnapshot, ViewState};
