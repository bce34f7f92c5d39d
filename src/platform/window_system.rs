use crate::foundation::core::{IRect, Point, Size};
use crate::foundation::error::LayeredResult;
use crate::surface::pixel::PixelSurface;

/// Opaque native top-level window handle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct WindowHandle(pub u64);

/// One entry of the native window enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowInfo {
    pub handle: WindowHandle,
    /// Window rectangle in screen coordinates.
    pub bounds: IRect,
    pub visible: bool,
    pub minimized: bool,
    /// Layered windows present their own buffers and are never sampled for blur-behind.
    pub layered: bool,
}

/// Other top-level windows that can show through a blurred window, topmost first.
///
/// Rebuilt wholesale on window activation; never edited in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleWindowSnapshot {
    windows: Vec<WindowInfo>,
}

impl VisibleWindowSnapshot {
    /// Keep the visible, non-minimised, non-layered windows of an enumeration, preserving order.
    pub fn from_windows(all: impl IntoIterator<Item = WindowInfo>) -> Self {
        Self {
            windows: all
                .into_iter()
                .filter(|w| w.visible && !w.minimized && !w.layered)
                .collect(),
        }
    }

    pub fn windows(&self) -> &[WindowInfo] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// The native window system, as far as layered windows need it.
///
/// Implementations own real OS handles and message pumps. Everything here is called from the
/// single UI thread.
pub trait WindowSystem {
    /// Create a borderless layered top-level window.
    fn create_window(&mut self) -> LayeredResult<WindowHandle>;

    fn destroy_window(&mut self, handle: WindowHandle) -> LayeredResult<()>;

    /// Push `size` pixels of `surface`, starting at `origin`, as the window's whole visible
    /// content and move it to `location` (screen coordinates).
    fn present(
        &mut self,
        handle: WindowHandle,
        surface: &PixelSurface,
        location: Point,
        size: Size,
        origin: Point,
    ) -> LayeredResult<()>;

    fn is_compositor_active(&self) -> bool;

    /// True when the compositor is active but renders window blur as opaque.
    fn is_compositor_blur_opaque(&self) -> bool;

    /// Register native blur-behind for `rect` (window-relative).
    fn enable_blur_behind(&mut self, handle: WindowHandle, rect: IRect) -> LayeredResult<()>;

    fn disable_blur_behind(&mut self, handle: WindowHandle) -> LayeredResult<()>;

    /// All top-level windows, topmost first.
    fn enumerate_windows(&self) -> Vec<WindowInfo>;

    /// Copy the desktop pixels under `screen_rect`.
    fn capture_desktop(&self, screen_rect: IRect) -> LayeredResult<PixelSurface>;

    /// Copy the pixels `window` shows under `screen_rect`.
    fn capture_window(&self, window: WindowHandle, screen_rect: IRect)
    -> LayeredResult<PixelSurface>;

    /// Pointer position in screen coordinates.
    fn cursor_position(&self) -> Point;

    /// Whether blur-behind can be left to the compositor.
    fn native_blur_available(&self) -> bool {
        self.is_compositor_active() && !self.is_compositor_blur_opaque()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/platform/window_system.rs"]
mod tests;
