use super::*;

fn block(text: &str, align: HorizontalAlign, padding: Padding) -> TextBlock {
    let mut b = TextBlock::new(TextStyle {
        align,
        padding,
        font_size: 10.0,
        ..TextStyle::default()
    });
    b.set_text(text, &BlockTextRenderer::default()).unwrap();
    b
}

#[test]
fn set_text_measures() {
    let b = block("abcd", HorizontalAlign::Left, Padding::ZERO);
    assert_eq!(b.measured(), Size::new(24, 10));
}

#[test]
fn left_text_starts_at_left_padding() {
    let b = block("ab", HorizontalAlign::Left, Padding::new(3, 2, 4, 1));
    assert_eq!(b.layout_rect(IRect::new(10, 10, 100, 20)), IRect::new(13, 12, 93, 17));
}

#[test]
fn right_text_hugs_right_padding_when_narrower() {
    let b = block("ab", HorizontalAlign::Right, Padding::new(0, 0, 5, 0));
    let r = b.layout_rect(IRect::new(0, 0, 100, 20));
    assert_eq!(r.x, 100 - (12 + 5));
    assert_eq!(r.width, 12);
}

#[test]
fn wide_text_falls_back_to_left() {
    let b = block("abcdefghij", HorizontalAlign::Right, Padding::new(2, 0, 2, 0));
    assert_eq!(b.layout_rect(IRect::new(0, 0, 40, 20)).x, 2);
    let c = block("abcdefghij", HorizontalAlign::Center, Padding::new(2, 0, 2, 0));
    assert_eq!(c.layout_rect(IRect::new(0, 0, 40, 20)).x, 2);
}

#[test]
fn centre_text_is_centred_in_available_width() {
    let b = block("ab", HorizontalAlign::Center, Padding::new(4, 0, 4, 0));
    // avail 92, text 12 -> 40 slack each side.
    assert_eq!(b.layout_rect(IRect::new(0, 0, 100, 20)).x, 44);
}

#[test]
fn block_renderer_paints_only_measured_cells() {
    let b = block("a", HorizontalAlign::Left, Padding::ZERO);
    let mut dest = PixelSurface::new(20, 20).unwrap();
    b.draw(&mut dest, &BlockTextRenderer::default(), IRect::new(2, 2, 18, 18), 255)
        .unwrap();
    assert_eq!(dest.pixel(2, 2), Some(Rgba8Premul::opaque(0, 0, 0)));
    assert_eq!(dest.pixel(7, 11), Some(Rgba8Premul::opaque(0, 0, 0)));
    assert_eq!(dest.pixel(8, 2), Some(Rgba8Premul::TRANSPARENT));
    assert_eq!(dest.pixel(2, 12), Some(Rgba8Premul::TRANSPARENT));
}
