pub(crate) mod layered_window;
