pub mod view_hook;
