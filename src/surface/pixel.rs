use crate::effects::composite::over;
use crate::foundation::core::{IRect, Point, Rgba8Premul, Size};
use crate::foundation::error::{LayeredError, LayeredResult};

/// Anything a constant-alpha blend can target.
///
/// [`PixelSurface`] is the real implementation; the seam exists so geometry code (nine-slice
/// splitting) can be observed without touching pixels.
pub trait BlendTarget {
    /// Blend `src_rect` of `src` into `dst_rect`, stretching with nearest-neighbour sampling and
    /// applying `opacity` uniformly to the whole source region.
    fn alpha_blend(&mut self, dst_rect: IRect, src: &PixelSurface, src_rect: IRect, opacity: u8);
}

/// Owned off-screen bitmap in premultiplied RGBA8, row-major and tightly packed.
///
/// The surface is both a blit source and a blit destination. Its buffer is released exactly once
/// when the value is dropped, including on early-return and error paths.
///
/// A surface with zero width or height is valid; every drawing operation on it is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Allocate a transparent surface. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> LayeredResult<Self> {
        let width = width.max(0) as u32;
        let height = height.max(0) as u32;
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    pub fn with_size(size: Size) -> LayeredResult<Self> {
        Self::new(size.width, size.height)
    }

    /// Allocate a surface where every pixel is `color`.
    pub fn filled(width: i32, height: i32, color: Rgba8Premul) -> LayeredResult<Self> {
        let mut s = Self::new(width, height)?;
        s.fill_rect(s.bounds(), color);
        Ok(s)
    }

    /// Wrap an existing premultiplied RGBA8 buffer.
    pub fn from_rgba8_premul(width: u32, height: u32, data: Vec<u8>) -> LayeredResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(LayeredError::surface(format!(
                "expected {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn height(&self) -> i32 {
        self.height as i32
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn bounds(&self) -> IRect {
        IRect::from_origin_size(Point::ZERO, self.size())
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8Premul> {
        let i = self.index(x, y)?;
        Some(Rgba8Premul::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba8Premul) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Reset `rect` (clipped to the surface) to transparent black.
    pub fn clear_rect(&mut self, rect: IRect) {
        self.fill_rect(rect, Rgba8Premul::TRANSPARENT);
    }

    pub fn fill_rect(&mut self, rect: IRect, color: Rgba8Premul) {
        let Some(r) = rect.intersect(self.bounds()) else {
            return;
        };
        let px = color.to_array();
        for y in r.top()..r.bottom() {
            let start = self.row_offset(y) + (r.left() as usize) * 4;
            let end = start + (r.width as usize) * 4;
            for d in self.data[start..end].chunks_exact_mut(4) {
                d.copy_from_slice(&px);
            }
        }
    }

    /// Opaque copy of `src_rect` of `src` into `dst_rect`, stretching with nearest-neighbour
    /// sampling. Destination pixels are replaced, alpha included.
    pub fn blit(&mut self, dst_rect: IRect, src: &PixelSurface, src_rect: IRect) {
        self.map_rect(dst_rect, src, src_rect, |d, s| d.copy_from_slice(s));
    }

    /// Copy `src` 1:1 with its top-left corner at `dst`.
    pub fn blit_at(&mut self, dst: Point, src: &PixelSurface) {
        let r = src.bounds();
        self.blit(r.translate(dst.x, dst.y), src, r);
    }

    /// Copy `rect` into a new surface of the same size. Parts outside this surface stay
    /// transparent.
    pub fn copy_rect(&self, rect: IRect) -> LayeredResult<PixelSurface> {
        let mut out = PixelSurface::with_size(rect.size())?;
        out.blit(out.bounds(), self, rect);
        Ok(out)
    }

    /// Resample the whole surface to `size` with a triangle (bilinear) filter.
    pub fn resize_bilinear(&self, size: Size) -> LayeredResult<PixelSurface> {
        if size.is_empty() || self.is_empty() {
            return PixelSurface::with_size(size);
        }
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| LayeredError::surface("surface buffer does not match its size"))?;
        let out = image::imageops::resize(
            &img,
            size.width as u32,
            size.height as u32,
            image::imageops::FilterType::Triangle,
        );
        let (w, h) = out.dimensions();
        PixelSurface::from_rgba8_premul(w, h, out.into_raw())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.row_offset(y) + (x as usize) * 4)
    }

    fn row_offset(&self, y: i32) -> usize {
        (y as usize) * (self.width as usize) * 4
    }

    /// Walk every destination pixel of `dst_rect` that lies on this surface and maps onto a
    /// source pixel inside `src`, calling `f(dst_px, src_px)`.
    fn map_rect<F>(&mut self, dst_rect: IRect, src: &PixelSurface, src_rect: IRect, mut f: F)
    where
        F: FnMut(&mut [u8], &[u8]),
    {
        if dst_rect.is_empty() || src_rect.is_empty() || self.is_empty() || src.is_empty() {
            return;
        }
        let Some(clip) = dst_rect.intersect(self.bounds()) else {
            return;
        };

        let identity = dst_rect.size() == src_rect.size();
        let sample = |rel: i32, dst_len: i32, src_origin: i32, src_len: i32| -> i32 {
            if identity {
                return src_origin + rel;
            }
            let scaled = (2 * i64::from(rel) + 1) * i64::from(src_len) / (2 * i64::from(dst_len));
            src_origin + scaled as i32
        };

        let src_cols: Vec<Option<usize>> = (clip.left()..clip.right())
            .map(|x| {
                let sx = sample(x - dst_rect.x, dst_rect.width, src_rect.x, src_rect.width);
                (0..src.width()).contains(&sx).then_some(sx as usize)
            })
            .collect();

        for y in clip.top()..clip.bottom() {
            let sy = sample(y - dst_rect.y, dst_rect.height, src_rect.y, src_rect.height);
            if !(0..src.height()).contains(&sy) {
                continue;
            }
            let src_row = src.row_offset(sy);
            let dst_row = self.row_offset(y) + (clip.left() as usize) * 4;

            for (col, sx) in src_cols.iter().enumerate() {
                let Some(sx) = sx else { continue };
                let si = src_row + sx * 4;
                let di = dst_row + col * 4;
                f(&mut self.data[di..di + 4], &src.data[si..si + 4]);
            }
        }
    }
}

impl BlendTarget for PixelSurface {
    fn alpha_blend(&mut self, dst_rect: IRect, src: &PixelSurface, src_rect: IRect, opacity: u8) {
        if opacity == 0 {
            return;
        }
        self.map_rect(dst_rect, src, src_rect, |d, s| {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
            d.copy_from_slice(&out);
        });
    }
}

fn byte_len(width: u32, height: u32) -> LayeredResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| LayeredError::surface("surface buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/surface/pixel.rs"]
mod tests;
