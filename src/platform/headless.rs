use std::collections::HashMap;

use crate::foundation::core::{IRect, Point, Size};
use crate::foundation::error::{LayeredError, LayeredResult};
use crate::platform::window_system::{WindowHandle, WindowInfo, WindowSystem};
use crate::surface::pixel::PixelSurface;

/// A frame handed to [`WindowSystem::present`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentedFrame {
    pub handle: WindowHandle,
    pub location: Point,
    pub size: Size,
    /// The presented region of the source surface.
    pub pixels: PixelSurface,
}

#[derive(Debug)]
struct HeadlessWindow {
    info: WindowInfo,
    content: PixelSurface,
}

/// In-memory window system for tests and tooling.
///
/// Foreign windows and the desktop are plain surfaces; presented frames and blur-behind
/// registrations are recorded for inspection.
#[derive(Debug)]
pub struct HeadlessWindowSystem {
    next_handle: u64,
    /// Topmost first.
    windows: Vec<HeadlessWindow>,
    desktop: PixelSurface,
    compositor_active: bool,
    compositor_blur_opaque: bool,
    blur_behind: HashMap<WindowHandle, IRect>,
    presented: Vec<PresentedFrame>,
    destroyed: Vec<WindowHandle>,
    cursor: Point,
}

impl Default for HeadlessWindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessWindowSystem {
    /// No compositor, an empty desktop, no foreign windows.
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            windows: Vec::new(),
            desktop: PixelSurface::default(),
            compositor_active: false,
            compositor_blur_opaque: false,
            blur_behind: HashMap::new(),
            presented: Vec::new(),
            destroyed: Vec::new(),
            cursor: Point::ZERO,
        }
    }

    /// Desktop pixels in screen coordinates, origin at (0, 0).
    pub fn with_desktop(mut self, desktop: PixelSurface) -> Self {
        self.desktop = desktop;
        self
    }

    pub fn with_compositor(mut self, active: bool, blur_opaque: bool) -> Self {
        self.compositor_active = active;
        self.compositor_blur_opaque = blur_opaque;
        self
    }

    /// Put a plain (non-layered) window on top of the z-order. `content` is sized like `bounds`.
    pub fn push_foreign_window(&mut self, bounds: IRect, content: PixelSurface) -> WindowHandle {
        let handle = self.alloc_handle();
        self.windows.insert(
            0,
            HeadlessWindow {
                info: WindowInfo {
                    handle,
                    bounds,
                    visible: true,
                    minimized: false,
                    layered: false,
                },
                content,
            },
        );
        handle
    }

    pub fn set_minimized(&mut self, handle: WindowHandle, minimized: bool) {
        if let Some(w) = self.window_mut(handle) {
            w.info.minimized = minimized;
        }
    }

    pub fn set_cursor(&mut self, p: Point) {
        self.cursor = p;
    }

    pub fn presented(&self) -> &[PresentedFrame] {
        &self.presented
    }

    pub fn last_presented(&self, handle: WindowHandle) -> Option<&PresentedFrame> {
        self.presented.iter().rev().find(|f| f.handle == handle)
    }

    pub fn blur_behind_region(&self, handle: WindowHandle) -> Option<IRect> {
        self.blur_behind.get(&handle).copied()
    }

    pub fn is_destroyed(&self, handle: WindowHandle) -> bool {
        self.destroyed.contains(&handle)
    }

    fn alloc_handle(&mut self) -> WindowHandle {
        let h = WindowHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn window(&self, handle: WindowHandle) -> LayeredResult<&HeadlessWindow> {
        self.windows
            .iter()
            .find(|w| w.info.handle == handle)
            .ok_or_else(|| LayeredError::platform(format!("unknown window {}", handle.0)))
    }

    fn window_mut(&mut self, handle: WindowHandle) -> Option<&mut HeadlessWindow> {
        self.windows.iter_mut().find(|w| w.info.handle == handle)
    }
}

impl WindowSystem for HeadlessWindowSystem {
    fn create_window(&mut self) -> LayeredResult<WindowHandle> {
        let handle = self.alloc_handle();
        self.windows.insert(
            0,
            HeadlessWindow {
                info: WindowInfo {
                    handle,
                    bounds: IRect::default(),
                    visible: true,
                    minimized: false,
                    layered: true,
                },
                content: PixelSurface::default(),
            },
        );
        Ok(handle)
    }

    fn destroy_window(&mut self, handle: WindowHandle) -> LayeredResult<()> {
        let before = self.windows.len();
        self.windows.retain(|w| w.info.handle != handle);
        if self.windows.len() == before {
            return Err(LayeredError::platform(format!(
                "destroy of unknown window {}",
                handle.0
            )));
        }
        self.blur_behind.remove(&handle);
        self.destroyed.push(handle);
        Ok(())
    }

    fn present(
        &mut self,
        handle: WindowHandle,
        surface: &PixelSurface,
        location: Point,
        size: Size,
        origin: Point,
    ) -> LayeredResult<()> {
        let pixels = surface.copy_rect(IRect::from_origin_size(origin, size))?;
        let window = self
            .window_mut(handle)
            .ok_or_else(|| LayeredError::platform(format!("present to unknown window {}", handle.0)))?;
        window.info.bounds = IRect::from_origin_size(location, size);
        window.content = pixels.clone();
        self.presented.push(PresentedFrame {
            handle,
            location,
            size,
            pixels,
        });
        Ok(())
    }

    fn is_compositor_active(&self) -> bool {
        self.compositor_active
    }

    fn is_compositor_blur_opaque(&self) -> bool {
        self.compositor_blur_opaque
    }

    fn enable_blur_behind(&mut self, handle: WindowHandle, rect: IRect) -> LayeredResult<()> {
        self.window(handle)?;
        self.blur_behind.insert(handle, rect);
        Ok(())
    }

    fn disable_blur_behind(&mut self, handle: WindowHandle) -> LayeredResult<()> {
        self.blur_behind.remove(&handle);
        Ok(())
    }

    fn enumerate_windows(&self) -> Vec<WindowInfo> {
        self.windows.iter().map(|w| w.info.clone()).collect()
    }

    fn capture_desktop(&self, screen_rect: IRect) -> LayeredResult<PixelSurface> {
        self.desktop.copy_rect(screen_rect)
    }

    fn capture_window(
        &self,
        window: WindowHandle,
        screen_rect: IRect,
    ) -> LayeredResult<PixelSurface> {
        let w = self.window(window)?;
        let local = screen_rect.translate(-w.info.bounds.x, -w.info.bounds.y);
        w.content.copy_rect(local)
    }

    fn cursor_position(&self) -> Point {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/platform/headless.rs"]
mod tests;
