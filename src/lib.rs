/// 内部实现模块
mod internal;


/// 导出控制器入口
pub use internal::controller::structs::{
    ControllerError, FlowController, FlowControllerBuilder, JobFlowState,
};

/// 控制器配置与默认值
pub mod config {
    use crate::internal;
    pub use internal::controller::structs::controller_config::*;
}

/// 两个流程使用的固定文案
pub mod constants {
    pub use crate::internal::controller::structs::constants::*;
}

/// 可取消任务：状态、终态与取消原因
pub mod job {
    use crate::internal;
    pub use internal::job::structs::*;
}

/// 视图状态、通知与渲染钩子
pub mod ui {
    use crate::internal;
    pub use internal::ui_context::structs::view_state::PROGRESS_CEILING;
    pub use internal::ui_context::structs::{
        Notification, UiContextError, ViewHooksContainer, ViewSnapshot, ViewState,
    };
    pub use internal::ui_context::traits::view_hook::ViewHook;
}

pub mod states {
    pub mod lock_reactive {
        use crate::internal;
        pub use internal::states::lock_reactive::*;
    }

    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }
}
