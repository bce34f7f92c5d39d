use tracing::debug;

use crate::effects::stack_blur::stack_blur;
use crate::foundation::core::{IRect, Point, Size};
use crate::foundation::error::{LayeredError, LayeredResult};
use crate::platform::window_system::{VisibleWindowSnapshot, WindowHandle, WindowSystem};
use crate::surface::pixel::{BlendTarget, PixelSurface};

/// How blur-behind is produced for the current compositor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlurStrategy {
    /// The compositor blurs behind the registered region itself.
    Native,
    /// Capture, blur and blend on the CPU.
    Manual,
}

pub fn blur_strategy(ws: &dyn WindowSystem) -> BlurStrategy {
    if ws.native_blur_available() {
        BlurStrategy::Native
    } else {
        BlurStrategy::Manual
    }
}

/// Result of one manual blur-behind pass. A skip leaves `dest` untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlurOutcome {
    Applied,
    Skipped(String),
}

impl BlurOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Paint a blurred copy of whatever lies behind `screen_bounds` into `dest` at `dest_offset`.
///
/// `paint_behind` fills a surface of `screen_bounds`' size with the pixels behind the window.
/// The capture is shrunk by `strength`, stack-blurred with radius `strength`, stretched back
/// and blended in at full opacity. Every failure, including an empty capture, turns into
/// [`BlurOutcome::Skipped`].
pub fn render_blur_behind<F>(
    paint_behind: F,
    dest: &mut PixelSurface,
    screen_bounds: IRect,
    dest_offset: Point,
    strength: u32,
) -> BlurOutcome
where
    F: FnOnce(&mut PixelSurface, IRect) -> LayeredResult<()>,
{
    match blur_into(paint_behind, dest, screen_bounds, dest_offset, strength) {
        Ok(()) => BlurOutcome::Applied,
        Err(err) => {
            debug!(error = %err, ?screen_bounds, "blur-behind skipped this frame");
            BlurOutcome::Skipped(err.to_string())
        }
    }
}

fn blur_into<F>(
    paint_behind: F,
    dest: &mut PixelSurface,
    screen_bounds: IRect,
    dest_offset: Point,
    strength: u32,
) -> LayeredResult<()>
where
    F: FnOnce(&mut PixelSurface, IRect) -> LayeredResult<()>,
{
    if screen_bounds.is_empty() {
        return Err(LayeredError::validation("blur bounds are empty"));
    }
    if strength == 0 {
        return Err(LayeredError::validation("blur strength is zero"));
    }

    let mut captured = PixelSurface::with_size(screen_bounds.size())?;
    paint_behind(&mut captured, screen_bounds)?;

    // Neither the shrink nor the blur changes past the larger side.
    let longest = screen_bounds.width.max(screen_bounds.height);
    let factor = i32::try_from(strength).unwrap_or(i32::MAX).min(longest);
    let small = Size::new(
        (screen_bounds.width / factor).max(1),
        (screen_bounds.height / factor).max(1),
    );
    let mut shrunk = captured.resize_bilinear(small)?;
    stack_blur(&mut shrunk, factor);
    let blurred = shrunk.resize_bilinear(screen_bounds.size())?;

    let target = IRect::from_origin_size(dest_offset, screen_bounds.size());
    dest.alpha_blend(target, &blurred, blurred.bounds(), 255);
    Ok(())
}

/// Reproduce what is visible behind `screen_bounds` into `dest` (sized like `screen_bounds`).
///
/// Without a compositor this is a plain desktop copy. With one, every window of `snapshot` that
/// overlaps is painted back to front; the window second from the top is alpha-blended and the
/// others are copied opaquely. `exclude` is never painted.
pub fn paint_behind_window(
    ws: &dyn WindowSystem,
    snapshot: &VisibleWindowSnapshot,
    exclude: Option<WindowHandle>,
    dest: &mut PixelSurface,
    screen_bounds: IRect,
) -> LayeredResult<()> {
    if !ws.is_compositor_active() {
        let desktop = ws.capture_desktop(screen_bounds)?;
        dest.blit_at(Point::ZERO, &desktop);
        return Ok(());
    }

    for (index, window) in snapshot.windows().iter().enumerate().rev() {
        if Some(window.handle) == exclude {
            continue;
        }
        let Some(inter) = screen_bounds.intersect(window.bounds) else {
            continue;
        };
        let pixels = ws.capture_window(window.handle, inter)?;
        let local = inter.translate(-screen_bounds.x, -screen_bounds.y);
        if index == 1 {
            dest.alpha_blend(local, &pixels, pixels.bounds(), 255);
        } else {
            dest.blit(local, &pixels, pixels.bounds());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur_behind.rs"]
mod tests;
