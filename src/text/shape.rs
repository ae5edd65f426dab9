//! Single-line text shaping with `parley` and glyph rasterization with `vello_cpu`.
//!
//! A [`TextShaper`] owns one registered face. [`TextShaper::shape`] lays a string out once;
//! the resulting [`ShapedText`] reports its metrics (so callers can size badges and centre
//! captions) and paints itself onto a [`Surface`].

use std::borrow::Cow;

use crate::{
    foundation::error::{ThumbError, ThumbResult},
    render::surface::Surface,
    text::fonts::FontFace,
};

/// Horizontal shear applied for a synthetic oblique.
pub const OBLIQUE_SKEW: f64 = 0.2;

/// Antialiasing margin around rasterized glyphs.
const RASTER_PAD: u32 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush colour carried through the parley layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl TextBrushRgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgba([255, 255, 255, 255]);
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgba([0, 0, 0, 255]);

    /// Brush from straight-alpha channels.
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }
}

/// Whether glyphs are drawn upright or sheared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slant {
    /// As designed by the face.
    Upright,
    /// Sheared by [`OBLIQUE_SKEW`] about the baseline.
    Oblique,
}

/// Shaping state bound to one face. Not `Sync`; parallel renderers build one per worker.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
    italic: bool,
}

impl TextShaper {
    /// Register `face` in a fresh font context.
    pub fn new(face: &FontFace) -> ThumbResult<Self> {
        // One shared buffer backs both the shaping and the raster font.
        let blob = parley::fontique::Blob::<u8>::new(face.bytes.clone());
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(blob.clone(), None);

        let mut family_name = None;
        for (id, _) in &families {
            let Some(name) = font_ctx.collection.family_name(*id) else {
                continue;
            };
            if family_name.is_none() || name.eq_ignore_ascii_case(&face.family) {
                family_name = Some(name.to_string());
            }
        }
        let family_name = family_name.ok_or_else(|| {
            ThumbError::render(format!("font '{}' registered no named family", face.family))
        })?;

        let font = vello_cpu::peniko::FontData::new(blob, face.index);

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
            italic: face.italic,
        })
    }

    /// Family name parley resolved for the face.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// `true` when the face itself is italic or oblique.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Lay `text` out on one line at `size_px`.
    pub fn shape(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> ThumbResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ThumbError::render("text size_px must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(ShapedText {
            layout,
            font: self.font.clone(),
        })
    }
}

/// A laid-out line of text.
pub struct ShapedText {
    layout: parley::Layout<TextBrushRgba8>,
    font: vello_cpu::peniko::FontData,
}

impl ShapedText {
    /// Advance width in pixels.
    pub fn width(&self) -> f32 {
        self.layout.width()
    }

    /// Line box height in pixels.
    pub fn height(&self) -> f32 {
        self.layout.height()
    }

    /// Distance from the line top to the baseline.
    pub fn baseline(&self) -> f32 {
        self.layout
            .lines()
            .next()
            .map(|l| l.metrics().baseline)
            .unwrap_or(0.0)
    }

    /// Font ascent above the baseline.
    pub fn ascent(&self) -> f32 {
        self.layout
            .lines()
            .next()
            .map(|l| l.metrics().ascent)
            .unwrap_or(0.0)
    }

    /// Font descent below the baseline (positive).
    pub fn descent(&self) -> f32 {
        self.layout
            .lines()
            .next()
            .map(|l| l.metrics().descent)
            .unwrap_or(0.0)
    }

    /// Paint the glyphs with the line top-left at `(x, y)` on `surface`. Glyphs outside the
    /// surface are clipped; empty text draws nothing.
    pub fn draw(&self, surface: &mut Surface, x: i64, y: i64, slant: Slant) -> ThumbResult<()> {
        match self.rasterize(slant)? {
            Some(raster) => raster.draw(surface, x, y),
            None => Ok(()),
        }
    }

    /// Rasterize the line once so it can be measured and then painted. Empty text yields
    /// `None`.
    pub fn rasterize(&self, slant: Slant) -> ThumbResult<Option<TextRaster>> {
        let text_w = self.width().max(0.0).ceil() as u32;
        let text_h = self.height().max(0.0).ceil() as u32;
        if text_w == 0 || text_h == 0 {
            return Ok(None);
        }

        let (skew, lean_left, lean_right) = match slant {
            Slant::Upright => (0.0, 0, 0),
            Slant::Oblique => (
                OBLIQUE_SKEW,
                (f64::from(self.descent()) * OBLIQUE_SKEW).ceil() as u32,
                (f64::from(self.ascent()) * OBLIQUE_SKEW).ceil() as u32,
            ),
        };

        let left = RASTER_PAD + lean_left;
        let pix_w = left + text_w + lean_right + RASTER_PAD;
        let pix_h = text_h + 2 * RASTER_PAD;
        let (Ok(w16), Ok(h16)) = (u16::try_from(pix_w), u16::try_from(pix_h)) else {
            return Err(ThumbError::render(format!(
                "text raster {pix_w}x{pix_h} exceeds u16 bounds"
            )));
        };

        let baseline = f64::from(self.baseline());
        let mut ctx = vello_cpu::RenderContext::new(w16, h16);
        ctx.set_transform(vello_cpu::kurbo::Affine::new([
            1.0,
            0.0,
            -skew,
            1.0,
            f64::from(left) + skew * baseline,
            f64::from(RASTER_PAD),
        ]));

        for line in self.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(Some(TextRaster {
            width: pix_w,
            height: pix_h,
            left,
            premul: pixmap.data_as_u8_slice().to_vec(),
        }))
    }
}

/// Vertical extent of painted pixels, in rows relative to the line top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InkRows {
    /// First row with coverage.
    pub top: i64,
    /// Row just past the last one with coverage.
    pub bottom: i64,
}

impl InkRows {
    /// Number of covered rows.
    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}

/// Premultiplied glyph coverage for one shaped line, padded for antialiasing and slant.
pub struct TextRaster {
    width: u32,
    height: u32,
    left: u32,
    premul: Vec<u8>,
}

impl TextRaster {
    /// Rows that received any coverage, or `None` for whitespace-only text.
    pub fn ink_rows(&self) -> Option<InkRows> {
        let stride = self.width as usize * 4;
        let inked = |row: &[u8]| row.chunks_exact(4).any(|px| px[3] != 0);
        let first = self.premul.chunks_exact(stride).position(inked)?;
        let last = self.premul.chunks_exact(stride).rposition(inked)?;
        let pad = i64::from(RASTER_PAD);
        Some(InkRows {
            top: first as i64 - pad,
            bottom: last as i64 + 1 - pad,
        })
    }

    /// Composite onto `surface` with the line top-left at `(x, y)`.
    pub fn draw(&self, surface: &mut Surface, x: i64, y: i64) -> ThumbResult<()> {
        surface.draw_premul(
            x - i64::from(self.left),
            y - i64::from(RASTER_PAD),
            self.width,
            self.height,
            &self.premul,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/shape.rs"]
mod tests;
