use super::*;
use crate::foundation::core::Rgba8Premul;

#[test]
fn radius_below_one_is_byte_identical() {
    let mut s = PixelSurface::new(3, 2).unwrap();
    s.set_pixel(1, 1, Rgba8Premul::from_straight_rgba(10, 20, 30, 40));
    let before = s.clone();

    stack_blur(&mut s, 0);
    assert_eq!(s, before);
    stack_blur(&mut s, -4);
    assert_eq!(s, before);
}

#[test]
fn flat_color_is_unchanged() {
    let px = Rgba8Premul::opaque(10, 200, 77);
    for radius in [1, 2, 5, 40] {
        let mut s = PixelSurface::filled(7, 5, px).unwrap();
        let before = s.clone();
        stack_blur(&mut s, radius);
        assert_eq!(s, before, "radius {radius}");
    }
}

#[test]
fn red_square_stays_same_size_and_opaque() {
    let mut s = PixelSurface::filled(10, 10, Rgba8Premul::opaque(255, 0, 0)).unwrap();
    stack_blur(&mut s, 3);
    assert_eq!((s.width(), s.height()), (10, 10));
    assert!(s.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn alpha_is_forced_opaque() {
    let mut s = PixelSurface::new(4, 4).unwrap();
    stack_blur(&mut s, 1);
    assert!(s.data().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn blur_spreads_a_single_bright_pixel() {
    let mut s = PixelSurface::filled(9, 9, Rgba8Premul::opaque(0, 0, 0)).unwrap();
    s.set_pixel(4, 4, Rgba8Premul::opaque(255, 255, 255));
    stack_blur(&mut s, 1);

    let lit = s.data().chunks_exact(4).filter(|px| px[0] > 0).count();
    assert_eq!(lit, 9);
    assert_eq!(s.pixel(4, 4).map(|p| p.r), Some(255 / 3 / 3));
    assert_eq!(s.pixel(0, 0).map(|p| p.r), Some(0));
}

#[test]
fn zero_area_surface_is_ignored() {
    let mut s = PixelSurface::new(0, 0).unwrap();
    stack_blur(&mut s, 3);
    assert!(s.is_empty());
}

#[test]
fn huge_radius_blurs_like_the_longest_side() {
    let mut flat = PixelSurface::filled(4, 4, Rgba8Premul::opaque(9, 9, 9)).unwrap();
    let before = flat.clone();
    stack_blur(&mut flat, i32::MAX);
    assert_eq!(flat, before);

    let mut a = PixelSurface::new(4, 3).unwrap();
    a.set_pixel(0, 0, Rgba8Premul::opaque(255, 0, 0));
    a.set_pixel(3, 2, Rgba8Premul::opaque(0, 0, 255));
    let mut b = a.clone();
    stack_blur(&mut a, i32::MAX);
    stack_blur(&mut b, 4);
    assert_eq!(a, b);
}
