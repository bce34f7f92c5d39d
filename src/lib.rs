//! Skinned layered windows composed entirely from application pixel buffers.
//!
//! Every frame is built in a shared off-screen [`PixelSurface`]: optional blur-behind first,
//! then a tree of virtual [`Control`]s painted back to front with nine-slice skins, and the
//! result is pushed to the native window through a [`WindowSystem`]. Pointer input is routed
//! through the same tree by [`dispatch`], which hit-tests topmost first and keeps the single
//! process-wide pointer capture in [`InputState`].
//!
//! Everything runs on one UI thread. Other threads hand work over with [`UiHandle::invoke`].
//!
//! ```no_run
//! use layered::{
//!     DrawContext, HeadlessWindowSystem, InputEvent, LayeredOpts, LayeredWindow, PointerEvent,
//!     Size, UiContext,
//! };
//!
//! # fn main() -> layered::LayeredResult<()> {
//! let mut ws = HeadlessWindowSystem::new();
//! let mut ctx = UiContext::new(LayeredOpts::default())?;
//! let mut window = LayeredWindow::new(&mut ws, &ctx, Size::new(320, 200))?;
//!
//! window.handle_input(&mut ctx, InputEvent::Move(PointerEvent::at(10, 10)));
//! window.update(&mut ctx, &mut ws, &DrawContext::default())?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod controls;
mod effects;
mod foundation;
mod input;
mod platform;
mod surface;
mod window;

pub use animation::animation_loop::AnimationLoop;
pub use animation::ramp::HoverRamp;
pub use assets::decode::decode_image;
pub use controls::button::{ButtonSkin, ButtonVisualState};
pub use controls::control::{Control, ControlId, ControlKind, DrawContext, DrawStats};
pub use controls::events::{
    ControlEvent, EventHandlers, EventKind, MouseButton, PointerEvent, SubscriptionId,
};
pub use controls::icon::IconSlot;
pub use controls::text::{BlockTextRenderer, TextBlock, TextRenderer, TextStyle};
pub use effects::blur_behind::{
    BlurOutcome, BlurStrategy, blur_strategy, paint_behind_window, render_blur_behind,
};
pub use effects::composite::{PremulRgba8, over, premultiply_rgba8_in_place, scale_opacity};
pub use effects::nine_slice::stretch_nine_slice;
pub use effects::stack_blur::stack_blur;
pub use foundation::config::LayeredOpts;
pub use foundation::core::{HorizontalAlign, IRect, Padding, Point, Rgba8Premul, Size};
pub use foundation::error::{LayeredError, LayeredResult};
pub use input::dispatcher::{InputEvent, InputState, dispatch};
pub use platform::headless::{HeadlessWindowSystem, PresentedFrame};
pub use platform::ui_thread::{UiHandle, UiQueue, ui_queue};
pub use platform::window_system::{VisibleWindowSnapshot, WindowHandle, WindowInfo, WindowSystem};
pub use surface::pixel::{BlendTarget, PixelSurface};
pub use window::layered_window::{FrameStats, LayeredWindow, UiContext};
