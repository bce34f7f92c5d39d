use super::*;
use crate::foundation::core::Rgba8Premul;

#[derive(Default)]
struct RecordingTarget {
    calls: Vec<(IRect, IRect, u8)>,
}

impl BlendTarget for RecordingTarget {
    fn alpha_blend(&mut self, dst_rect: IRect, _src: &PixelSurface, src_rect: IRect, opacity: u8) {
        self.calls.push((dst_rect, src_rect, opacity));
    }
}

fn skin(w: i32, h: i32) -> PixelSurface {
    PixelSurface::filled(w, h, Rgba8Premul::opaque(9, 9, 9)).unwrap()
}

#[test]
fn zero_margins_issue_one_full_area_blend() {
    let src = skin(10, 10);
    let mut rec = RecordingTarget::default();
    let dest_rect = IRect::new(3, 4, 40, 20);

    let n = stretch_nine_slice(&mut rec, dest_rect, &src, src.bounds(), Padding::ZERO, 200);

    assert_eq!(n, 1);
    assert_eq!(rec.calls, vec![(dest_rect, src.bounds(), 200)]);
}

#[test]
fn full_margins_issue_nine_blends_with_fixed_corners() {
    let src = skin(10, 10);
    let mut rec = RecordingTarget::default();
    let margins = Padding::new(2, 3, 2, 3);

    let n = stretch_nine_slice(&mut rec, IRect::new(0, 0, 50, 30), &src, src.bounds(), margins, 255);
    assert_eq!(n, 9);

    // top-left corner is copied 1:1
    assert!(rec.calls.contains(&(IRect::new(0, 0, 2, 3), IRect::new(0, 0, 2, 3), 255)));
    // bottom-right corner is copied 1:1
    assert!(rec.calls.contains(&(IRect::new(48, 27, 2, 3), IRect::new(8, 7, 2, 3), 255)));
    // bottom edge stretches horizontally only and uses the bottom margin height
    assert!(rec.calls.contains(&(IRect::new(2, 27, 46, 3), IRect::new(2, 7, 6, 3), 255)));
    // centre stretches both ways
    assert_eq!(
        rec.calls.last(),
        Some(&(IRect::new(2, 3, 46, 24), IRect::new(2, 3, 6, 4), 255))
    );
}

#[test]
fn only_left_margin_skips_other_sides() {
    let src = skin(10, 10);
    let mut rec = RecordingTarget::default();
    let n = stretch_nine_slice(
        &mut rec,
        IRect::new(0, 0, 20, 10),
        &src,
        src.bounds(),
        Padding::new(4, 0, 0, 0),
        255,
    );
    assert_eq!(n, 2);
    assert_eq!(rec.calls[0].0, IRect::new(0, 0, 4, 10));
    assert_eq!(rec.calls[1].0, IRect::new(4, 0, 16, 10));
}

#[test]
fn dest_smaller_than_margins_skips_centre_and_edges() {
    let src = skin(10, 10);
    let mut rec = RecordingTarget::default();
    let n = stretch_nine_slice(
        &mut rec,
        IRect::new(0, 0, 5, 5),
        &src,
        src.bounds(),
        Padding::uniform(3),
        255,
    );
    // only the four corners survive
    assert_eq!(n, 4);
    assert!(rec.calls.iter().all(|(d, s, _)| !d.is_empty() && !s.is_empty()));
}

#[test]
fn same_size_zero_margin_full_opacity_is_a_copy() {
    let mut src = PixelSurface::new(3, 2).unwrap();
    src.set_pixel(0, 0, Rgba8Premul::opaque(255, 0, 0));
    src.set_pixel(2, 1, Rgba8Premul::from_straight_rgba(0, 255, 0, 128));

    let mut dest = PixelSurface::new(3, 2).unwrap();
    let dest_rect = dest.bounds();
    stretch_nine_slice(&mut dest, dest_rect, &src, src.bounds(), Padding::ZERO, 255);
    assert_eq!(dest, src);
}

#[test]
fn stretching_a_surface_keeps_corner_pixels() {
    let mut src = PixelSurface::filled(4, 4, Rgba8Premul::opaque(0, 0, 255)).unwrap();
    src.set_pixel(0, 0, Rgba8Premul::opaque(255, 0, 0));

    let mut dest = PixelSurface::new(16, 8).unwrap();
    let dest_rect = dest.bounds();
    stretch_nine_slice(&mut dest, dest_rect, &src, src.bounds(), Padding::uniform(1), 255);

    assert_eq!(dest.pixel(0, 0), Some(Rgba8Premul::opaque(255, 0, 0)));
    assert_eq!(dest.pixel(1, 1), Some(Rgba8Premul::opaque(0, 0, 255)));
    assert_eq!(dest.pixel(15, 7), Some(Rgba8Premul::opaque(0, 0, 255)));
}
