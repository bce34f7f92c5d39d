pub(crate) mod headless;
pub(crate) mod ui_thread;
pub(crate) mod window_system;
