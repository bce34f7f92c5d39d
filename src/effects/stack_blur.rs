use crate::surface::pixel::PixelSurface;

/// Blur `surface` in place with a two-pass sliding-window box filter.
///
/// Each pass keeps a running sum per colour channel over a `2 * radius + 1` window, so the cost
/// is O(width * height) whatever the radius. Samples past an edge reuse the edge pixel. Averages
/// come from a lookup table instead of per-pixel division.
///
/// The output is fully opaque: alpha is forced to 255. `radius < 1` and zero-area surfaces are
/// left untouched. Radii past the larger side blur like that side, since every sample beyond it
/// is an edge repeat.
pub fn stack_blur(surface: &mut PixelSurface, radius: i32) {
    if radius < 1 || surface.is_empty() {
        return;
    }

    let w = surface.width() as usize;
    let h = surface.height() as usize;
    let r = (radius as usize).min(w.max(h));
    let div = r + r + 1;

    let dv: Vec<u8> = (0..256 * div).map(|i| (i / div) as u8).collect();

    let mut red = vec![0u8; w * h];
    let mut green = vec![0u8; w * h];
    let mut blue = vec![0u8; w * h];

    let data = surface.data_mut();

    for y in 0..h {
        let row = y * w;
        let mut sum = [0usize; 3];
        for i in 0..div {
            let x = clamp_index(i as isize - r as isize, w);
            let p = (row + x) * 4;
            add_px(&mut sum, &data[p..p + 3]);
        }
        for x in 0..w {
            red[row + x] = dv[sum[0]];
            green[row + x] = dv[sum[1]];
            blue[row + x] = dv[sum[2]];

            let p_in = (row + (x + r + 1).min(w - 1)) * 4;
            let p_out = (row + x.saturating_sub(r)) * 4;
            for c in 0..3 {
                sum[c] = sum[c] + usize::from(data[p_in + c]) - usize::from(data[p_out + c]);
            }
        }
    }

    for x in 0..w {
        let mut sum = [0usize; 3];
        for i in 0..div {
            let yi = clamp_index(i as isize - r as isize, h) * w + x;
            sum[0] += usize::from(red[yi]);
            sum[1] += usize::from(green[yi]);
            sum[2] += usize::from(blue[yi]);
        }
        for y in 0..h {
            let p = (y * w + x) * 4;
            data[p] = dv[sum[0]];
            data[p + 1] = dv[sum[1]];
            data[p + 2] = dv[sum[2]];
            data[p + 3] = 255;

            let i_in = (y + r + 1).min(h - 1) * w + x;
            let i_out = y.saturating_sub(r) * w + x;
            sum[0] = sum[0] + usize::from(red[i_in]) - usize::from(red[i_out]);
            sum[1] = sum[1] + usize::from(green[i_in]) - usize::from(green[i_out]);
            sum[2] = sum[2] + usize::from(blue[i_in]) - usize::from(blue[i_out]);
        }
    }
}

fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

fn add_px(sum: &mut [usize; 3], px: &[u8]) {
    for (s, &v) in sum.iter_mut().zip(px) {
        *s += usize::from(v);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/stack_blur.rs"]
mod tests;
