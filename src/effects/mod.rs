pub(crate) mod blur_behind;
pub(crate) mod composite;
pub(crate) mod nine_slice;
pub(crate) mod stack_blur;
