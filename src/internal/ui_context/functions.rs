pub mod log_thread;
