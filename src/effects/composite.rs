//! Premultiplied RGBA8 pixel math shared by every blit and blend.

pub type PremulRgba8 = [u8; 4];

/// Source-over with a constant alpha applied uniformly to the whole source.
///
/// `src` is premultiplied, so its own alpha still takes part; `opacity` scales every channel of
/// `src` before compositing.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: u8) -> PremulRgba8 {
    if opacity == 0 || src[3] == 0 {
        return dst;
    }

    let op = u16::from(opacity);
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Combine two constant alphas, e.g. a hover ramp nested inside a control's opacity.
pub fn scale_opacity(a: u8, b: u8) -> u8 {
    mul_div255(u16::from(a), u16::from(b))
}

pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255(u16::from(px[0]), a);
        px[1] = mul_div255(u16::from(px[1]), a);
        px[2] = mul_div255(u16::from(px[2]), a);
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
