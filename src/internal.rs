pub mod controller;
pub mod job;
pub mod states;
pub mod ui_context;
