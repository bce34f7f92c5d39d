use std::io::Cursor;

use super::*;

fn encode_png(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let buf = encode_png(1, 1, vec![100u8, 50u8, 200u8, 128u8]);

    let surface = decode_image(&buf).unwrap();
    assert_eq!(surface.width(), 1);
    assert_eq!(surface.height(), 1);
    assert_eq!(
        surface.data(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(err.to_string().contains("decode image"));
}
