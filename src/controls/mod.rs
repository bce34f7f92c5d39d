pub(crate) mod button;
pub(crate) mod control;
pub(crate) mod events;
pub(crate) mod icon;
pub(crate) mod text;
