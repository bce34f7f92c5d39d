use tracing::warn;

use crate::animation::animation_loop::AnimationLoop;
use crate::controls::button::ButtonSkin;
use crate::controls::control::{Control, DrawContext};
use crate::controls::events::{ControlEvent, PointerEvent};
use crate::effects::blur_behind::{BlurOutcome, paint_behind_window, render_blur_behind};
use crate::foundation::config::LayeredOpts;
use crate::foundation::core::{IRect, Point, Size};
use crate::foundation::error::LayeredResult;
use crate::input::dispatcher::{InputEvent, InputState, dispatch};
use crate::platform::window_system::{VisibleWindowSnapshot, WindowHandle, WindowSystem};
use crate::surface::pixel::PixelSurface;

/// State shared by every layered window of the process.
///
/// Owned by the UI thread and lent to each window operation: the pointer capture, the
/// visible-window snapshot used for manual blur, and the single presentation buffer every
/// frame is composed into.
#[derive(Debug)]
pub struct UiContext {
    opts: LayeredOpts,
    input: InputState,
    visible_windows: VisibleWindowSnapshot,
    buffer: PixelSurface,
}

impl UiContext {
    pub fn new(opts: LayeredOpts) -> LayeredResult<Self> {
        opts.validate()?;
        let buffer = PixelSurface::with_size(opts.max_buffer_size)?;
        Ok(Self {
            opts,
            input: InputState::new(),
            visible_windows: VisibleWindowSnapshot::default(),
            buffer,
        })
    }

    pub fn opts(&self) -> &LayeredOpts {
        &self.opts
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn visible_windows(&self) -> &VisibleWindowSnapshot {
        &self.visible_windows
    }

    /// The shared presentation buffer; windows never exceed its size.
    pub fn buffer(&self) -> &PixelSurface {
        &self.buffer
    }

    /// An empty button skin animating at the configured hover step.
    pub fn button_skin(&self) -> ButtonSkin {
        ButtonSkin::new().with_step(self.opts.hover_step)
    }

    /// Replace the snapshot with the window system's current visible, non-layered windows.
    pub fn refresh_visible_windows(&mut self, ws: &dyn WindowSystem) {
        self.visible_windows = VisibleWindowSnapshot::from_windows(ws.enumerate_windows());
    }
}

/// What one [`LayeredWindow::update`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub controls_drawn: usize,
    pub child_failures: usize,
    /// Outcome of the manual blur pass, when one ran.
    pub blur: Option<BlurOutcome>,
    /// Size pushed to the window system, after clamping.
    pub size: Size,
    pub presented: bool,
}

/// A top-level window whose whole content is composed from pixels.
///
/// The root control spans the window; its padding is the content padding that also bounds the
/// blur-behind region.
#[derive(Debug)]
pub struct LayeredWindow {
    handle: WindowHandle,
    location: Point,
    root: Control,
    background_blur: bool,
    blur_strength: u32,
    exclude_from_blur: Option<WindowHandle>,
    animation: AnimationLoop,
    disposed: bool,
}

impl LayeredWindow {
    pub fn new(ws: &mut dyn WindowSystem, ctx: &UiContext, size: Size) -> LayeredResult<Self> {
        let handle = ws.create_window()?;
        let mut root = Control::panel();
        root.set_size(size)?;
        Ok(Self {
            handle,
            location: Point::ZERO,
            root,
            background_blur: false,
            blur_strength: ctx.opts.blur_strength,
            exclude_from_blur: None,
            animation: AnimationLoop::new(),
            disposed: false,
        })
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn location(&self) -> Point {
        self.location
    }

    /// Move the window; takes effect on the next update.
    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    pub fn size(&self) -> Size {
        self.root.size()
    }

    pub fn set_size(&mut self, size: Size) -> LayeredResult<()> {
        self.root.set_size(size)
    }

    /// Screen rectangle.
    pub fn bounds(&self) -> IRect {
        IRect::from_origin_size(self.location, self.size())
    }

    pub fn root(&self) -> &Control {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Control {
        &mut self.root
    }

    pub fn is_visible(&self) -> bool {
        self.root.is_visible()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.root.set_visible(visible);
    }

    pub fn background_blur(&self) -> bool {
        self.background_blur
    }

    /// Toggle blur-behind. Turning it off while a compositor runs unregisters the native region.
    pub fn set_background_blur(
        &mut self,
        enabled: bool,
        ws: &mut dyn WindowSystem,
    ) -> LayeredResult<()> {
        self.background_blur = enabled;
        if !enabled && ws.is_compositor_active() {
            ws.disable_blur_behind(self.handle)?;
        }
        Ok(())
    }

    pub fn blur_strength(&self) -> u32 {
        self.blur_strength
    }

    pub fn set_blur_strength(&mut self, strength: u32) {
        self.blur_strength = strength;
    }

    /// A window left out of the manual re-composite, typically one that sits behind this one
    /// and follows it around.
    pub fn set_exclude_from_blur(&mut self, window: Option<WindowHandle>) {
        self.exclude_from_blur = window;
    }

    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn suspend_update(&mut self) {
        self.root.suspend_update();
    }

    pub fn resume_update(&mut self) {
        self.root.resume_update();
    }

    /// The window was activated: other windows may have moved, so re-read them.
    pub fn on_activated(&self, ctx: &mut UiContext, ws: &dyn WindowSystem) {
        ctx.refresh_visible_windows(ws);
    }

    /// Feed one pointer event to the control tree. Returns the control events fired.
    pub fn handle_input(&mut self, ctx: &mut UiContext, event: InputEvent) -> Vec<ControlEvent> {
        if self.disposed {
            return Vec::new();
        }
        let width = self.root.size().width;
        dispatch(
            &mut self.root,
            width,
            &mut ctx.input,
            &mut self.animation,
            event,
        )
    }

    /// Re-derive hover state from the window system's cursor, for when the window moved or
    /// changed under a still pointer. Does nothing while a press is captured, since the button
    /// state is unknown.
    pub fn sync_pointer(
        &mut self,
        ctx: &mut UiContext,
        ws: &dyn WindowSystem,
    ) -> Vec<ControlEvent> {
        if self.disposed || ctx.input.pressed().is_some() {
            return Vec::new();
        }
        let cursor = ws.cursor_position();
        let event = match self.bounds().intersect(IRect::new(cursor.x, cursor.y, 1, 1)) {
            Some(_) => InputEvent::Move(PointerEvent::at(
                cursor.x - self.location.x,
                cursor.y - self.location.y,
            )),
            None => InputEvent::Leave,
        };
        self.handle_input(ctx, event)
    }

    /// One animation tick. Returns true when a ramp moved and the window should be updated.
    pub fn tick(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.root.tick(&mut self.animation)
    }

    /// Compose and present one frame.
    ///
    /// Nothing happens while the window is update-locked, hidden or disposed. Blur and child
    /// draw failures degrade the frame instead of failing it; only the window system refusing
    /// the frame is an error.
    #[tracing::instrument(skip_all, fields(window = self.handle.0))]
    pub fn update(
        &mut self,
        ctx: &mut UiContext,
        ws: &mut dyn WindowSystem,
        cx: &DrawContext<'_>,
    ) -> LayeredResult<FrameStats> {
        let mut stats = FrameStats::default();
        if self.disposed || self.root.is_update_locked() || !self.root.is_visible() {
            return Ok(stats);
        }

        if self.root.size().height == 0 {
            let width = self.root.size().width;
            self.root.set_size(Size::new(width, 1))?;
        }
        let requested = self.root.size();
        let size = requested.min(ctx.buffer.size());
        if size != requested {
            warn!(?requested, clamped = ?size, "window larger than the shared buffer");
        }
        stats.size = size;

        let frame = IRect::from_origin_size(Point::ZERO, size);
        ctx.buffer.clear_rect(frame);

        let pad = self.root.padding();
        let native = ws.native_blur_available();
        if self.background_blur && !native {
            let screen = IRect::from_origin_size(self.location, size).deflate(pad);
            let snapshot = &ctx.visible_windows;
            let behind: &dyn WindowSystem = &*ws;
            let exclude = self.exclude_from_blur;
            stats.blur = Some(render_blur_behind(
                |s, r| paint_behind_window(behind, snapshot, exclude, s, r),
                &mut ctx.buffer,
                screen,
                Point::new(pad.left, pad.top),
                self.blur_strength,
            ));
        }

        match self.root.draw(&mut ctx.buffer, cx, Point::ZERO, size.width) {
            Ok(drawn) => {
                stats.controls_drawn = drawn.controls_drawn;
                stats.child_failures = drawn.child_failures;
            }
            Err(err) => {
                warn!(error = %err, "root control failed to draw");
                stats.child_failures += 1;
            }
        }

        ws.present(self.handle, &ctx.buffer, self.location, size, Point::ZERO)?;
        stats.presented = true;

        if self.background_blur && native {
            ws.enable_blur_behind(self.handle, frame.deflate(pad))?;
        }
        Ok(stats)
    }

    /// Stop animating, destroy the native window and dispose the control tree. Later calls do
    /// nothing.
    pub fn dispose(&mut self, ws: &mut dyn WindowSystem) -> LayeredResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        self.animation.stop();
        let destroyed = ws.destroy_window(self.handle);
        self.root.dispose(&mut self.animation);
        destroyed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/window/layered_window.rs"]
mod tests;
