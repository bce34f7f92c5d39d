pub(crate) mod animation_loop;
pub(crate) mod ramp;
