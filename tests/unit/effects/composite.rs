use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 255), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn over_dst_transparent_returns_src_at_full_opacity() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn constant_alpha_halves_an_opaque_source() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    let out = over(dst, src, 128);
    assert_eq!(out, [128, 0, 0, 255]);
}

#[test]
fn premultiply_zeroes_transparent_pixels() {
    let mut px = vec![200, 100, 50, 0, 255, 255, 255, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0, 255, 255, 255, 255]);
}

#[test]
fn scale_opacity_is_identity_at_full_and_zero_at_none() {
    assert_eq!(scale_opacity(255, 200), 200);
    assert_eq!(scale_opacity(0, 200), 0);
    assert_eq!(scale_opacity(128, 128), 64);
}
