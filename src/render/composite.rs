//! Integer source-over compositing on premultiplied RGBA8.

use crate::foundation::error::{ThumbError, ThumbResult};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Premultiply a straight-alpha colour.
pub fn premultiply(rgba: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(rgba[3]);
    [
        mul_div255(u16::from(rgba[0]), a),
        mul_div255(u16::from(rgba[1]), a),
        mul_div255(u16::from(rgba[2]), a),
        rgba[3],
    ]
}

/// Source-over: `src + dst * (1 - src.a)`.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Composite `src` over `dst` pixel by pixel; both buffers must have the same length.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> ThumbResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ThumbError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Flatten premultiplied RGBA8 onto an opaque background, producing packed RGB8.
pub fn flatten_to_rgb8(src: &[u8], bg_rgb: [u8; 3]) -> ThumbResult<Vec<u8>> {
    if !src.len().is_multiple_of(4) {
        return Err(ThumbError::render(
            "flatten_to_rgb8 expects an rgba8 buffer",
        ));
    }

    let mut out = Vec::with_capacity(src.len() / 4 * 3);
    for s in src.chunks_exact(4) {
        let inv = 255u16 - u16::from(s[3]);
        for c in 0..3 {
            out.push(s[c].saturating_add(mul_div255(u16::from(bg_rgb[c]), inv)));
        }
    }
    Ok(out)
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
