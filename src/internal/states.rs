pub mod lock_reactive;
pub(crate) mod queue_reactive;
pub(crate) mod reactive_core;
pub mod unlock_reactive;
