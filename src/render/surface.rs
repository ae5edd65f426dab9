//! Premultiplied RGBA8 raster used for every intermediate image.

use image::{RgbImage, RgbaImage};

use crate::{
    foundation::error::{ThumbError, ThumbResult},
    render::composite::{flatten_to_rgb8, over, over_in_place, premultiply},
};

/// A width × height buffer of premultiplied RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Fully transparent surface.
    pub fn new_transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; buffer_len(width, height)],
        }
    }

    /// Surface filled with a straight-alpha colour.
    pub fn new_filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let px = premultiply(rgba);
        Self {
            width,
            height,
            data: px.repeat(buffer_len(width, height) / 4),
        }
    }

    /// Adopt a straight-alpha RGBA image.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let mut data = Vec::with_capacity(img.as_raw().len());
        for px in img.pixels() {
            data.extend_from_slice(&premultiply(px.0));
        }
        Self {
            width: img.width(),
            height: img.height(),
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Blend a straight-alpha rectangle over the surface. Parts outside the surface are clipped.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, rgba: [u8; 4]) {
        let src = premultiply(rgba);
        let Some(r) = self.clip(x, y, w, h) else {
            return;
        };
        for row in r.y0..r.y1 {
            for col in r.x0..r.x1 {
                let i = self.offset(col, row);
                let dst = [
                    self.data[i],
                    self.data[i + 1],
                    self.data[i + 2],
                    self.data[i + 3],
                ];
                self.data[i..i + 4].copy_from_slice(&over(dst, src));
            }
        }
    }

    /// Source-over a premultiplied `w`×`h` buffer with its top-left at `(x, y)`, clipped.
    pub fn draw_premul(&mut self, x: i64, y: i64, w: u32, h: u32, src: &[u8]) -> ThumbResult<()> {
        if src.len() != buffer_len(w, h) {
            return Err(ThumbError::render(format!(
                "draw_premul: buffer of {} bytes does not match {w}x{h}",
                src.len()
            )));
        }
        let Some(r) = self.clip(x, y, w, h) else {
            return Ok(());
        };

        let span = (r.x1 - r.x0) as usize * 4;
        for row in r.y0..r.y1 {
            let sx = (i64::from(r.x0) - x) as usize;
            let sy = (i64::from(row) - y) as usize;
            let s = (sy * w as usize + sx) * 4;
            let d = self.offset(r.x0, row);
            over_in_place(&mut self.data[d..d + span], &src[s..s + span])?;
        }
        Ok(())
    }

    /// Source-over another surface at `(x, y)`.
    pub fn draw_surface(&mut self, src: &Surface, x: i64, y: i64) -> ThumbResult<()> {
        self.draw_premul(x, y, src.width, src.height, &src.data)
    }

    /// Flatten onto an opaque background colour.
    pub fn to_rgb_image(&self, bg_rgb: [u8; 3]) -> ThumbResult<RgbImage> {
        let rgb = flatten_to_rgb8(&self.data, bg_rgb)?;
        RgbImage::from_raw(self.width, self.height, rgb)
            .ok_or_else(|| ThumbError::render("flattened buffer does not match surface size"))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn clip(&self, x: i64, y: i64, w: u32, h: u32) -> Option<ClipRect> {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(w)).min(i64::from(self.width));
        let y1 = (y + i64::from(h)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(ClipRect {
            x0: x0 as u32,
            y0: y0 as u32,
            x1: x1 as u32,
            y1: y1 as u32,
        })
    }
}

struct ClipRect {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
