use anyhow::Context;

use crate::effects::composite::premultiply_rgba8_in_place;
use crate::foundation::error::LayeredResult;
use crate::surface::pixel::PixelSurface;

/// Decode encoded image bytes (PNG) into a premultiplied [`PixelSurface`].
///
/// Skins are usually authored with straight alpha; the conversion happens once here so every
/// later blend can assume premultiplied pixels.
pub fn decode_image(bytes: &[u8]) -> LayeredResult<PixelSurface> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    PixelSurface::from_rgba8_premul(width, height, rgba8_premul)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
