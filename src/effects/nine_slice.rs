use crate::foundation::core::{IRect, Padding};
use crate::surface::pixel::{BlendTarget, PixelSurface};

/// Draw `src_rect` of `src` into `dest_rect`, keeping the `margins` unscaled.
///
/// Corners are copied 1:1, edges stretch along one axis and the centre stretches along both.
/// Every region is blended with the same constant `opacity`. A side with a zero margin emits no
/// edge or corner draws, and regions whose destination or source would have a non-positive size
/// are skipped, which covers a `dest_rect` smaller than its margins.
///
/// Returns the number of blend calls issued.
pub fn stretch_nine_slice<T>(
    dest: &mut T,
    dest_rect: IRect,
    src: &PixelSurface,
    src_rect: IRect,
    margins: Padding,
    opacity: u8,
) -> usize
where
    T: BlendTarget + ?Sized,
{
    let m = margins;
    let (d, s) = (dest_rect, src_rect);
    let d_inner_w = d.width - m.horizontal();
    let d_inner_h = d.height - m.vertical();
    let s_inner_w = s.width - m.horizontal();
    let s_inner_h = s.height - m.vertical();

    let mut draws = 0;
    let mut region = |dst: IRect, src_part: IRect| {
        if dst.is_empty() || src_part.is_empty() {
            return;
        }
        dest.alpha_blend(dst, src, src_part, opacity);
        draws += 1;
    };

    if m.left > 0 {
        region(
            IRect::new(d.x, d.y + m.top, m.left, d_inner_h),
            IRect::new(s.x, s.y + m.top, m.left, s_inner_h),
        );
    }

    if m.right > 0 {
        region(
            IRect::new(d.right() - m.right, d.y + m.top, m.right, d_inner_h),
            IRect::new(s.right() - m.right, s.y + m.top, m.right, s_inner_h),
        );
    }

    if m.top > 0 {
        region(
            IRect::new(d.x + m.left, d.y, d_inner_w, m.top),
            IRect::new(s.x + m.left, s.y, s_inner_w, m.top),
        );
        if m.left > 0 {
            region(
                IRect::new(d.x, d.y, m.left, m.top),
                IRect::new(s.x, s.y, m.left, m.top),
            );
        }
        if m.right > 0 {
            region(
                IRect::new(d.right() - m.right, d.y, m.right, m.top),
                IRect::new(s.right() - m.right, s.y, m.right, m.top),
            );
        }
    }

    if m.bottom > 0 {
        region(
            IRect::new(d.x + m.left, d.bottom() - m.bottom, d_inner_w, m.bottom),
            IRect::new(s.x + m.left, s.bottom() - m.bottom, s_inner_w, m.bottom),
        );
        if m.left > 0 {
            region(
                IRect::new(d.x, d.bottom() - m.bottom, m.left, m.bottom),
                IRect::new(s.x, s.bottom() - m.bottom, m.left, m.bottom),
            );
        }
        if m.right > 0 {
            region(
                IRect::new(d.right() - m.right, d.bottom() - m.bottom, m.right, m.bottom),
                IRect::new(s.right() - m.right, s.bottom() - m.bottom, m.right, m.bottom),
            );
        }
    }

    region(
        IRect::new(d.x + m.left, d.y + m.top, d_inner_w, d_inner_h),
        IRect::new(s.x + m.left, s.y + m.top, s_inner_w, s_inner_h),
    );

    draws
}

#[cfg(test)]
#[path = "../../tests/unit/effects/nine_slice.rs"]
mod tests;
