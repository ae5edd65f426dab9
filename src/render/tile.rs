//! Tile annotation: resize one sampled frame and stamp its timestamp badge.

use image::{RgbaImage, imageops::FilterType};

use crate::{
    foundation::{error::ThumbResult, format::format_timestamp},
    layout::plan::LayoutPlan,
    render::surface::Surface,
    text::shape::{ShapedText, Slant, TextBrushRgba8, TextShaper},
};

/// Appearance of the timestamp badge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BadgeStyle {
    /// Badge fill, straight alpha.
    pub fill_rgba: [u8; 4],
    /// Timestamp text colour.
    pub text_rgba: [u8; 4],
    /// Gap between the badge and the tile's bottom-right corner, as a fraction of tile width.
    pub margin_ratio: f64,
    /// Space between the text box and the badge edge, as a fraction of tile width.
    pub inner_padding_ratio: f64,
}

/// Badge fill alpha (~70%).
pub const DEFAULT_BADGE_ALPHA: u8 = 180;

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            fill_rgba: [0, 0, 0, DEFAULT_BADGE_ALPHA],
            text_rgba: [255, 255, 255, 255],
            margin_ratio: 0.02,
            inner_padding_ratio: 0.015,
        }
    }
}

/// Badge rectangle and text origin inside a tile. Coordinates may be negative when the text
/// is wider than the tile; drawing clips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeGeometry {
    /// Badge left edge.
    pub left: i64,
    /// Badge top edge.
    pub top: i64,
    /// Badge width.
    pub width: u32,
    /// Badge height.
    pub height: u32,
    /// Left edge of the text box.
    pub text_x: i64,
    /// Top of the text's ascent box.
    pub text_y: i64,
}

impl BadgeGeometry {
    /// Place a badge for text of the given advance width, painted ink height and font
    /// metrics.
    ///
    /// The badge wraps the text box (advance × ink height) with the inner padding on every
    /// side, is extended downwards by the descent, and sits `margin` away from the
    /// bottom-right corner. The text is centred using `ascent + descent` for the vertical
    /// extent.
    pub fn compute(
        plan: &LayoutPlan,
        style: &BadgeStyle,
        text_width: f32,
        ink_height: u32,
        ascent: f32,
        descent: f32,
    ) -> Self {
        let fw = f64::from(plan.frame_width);
        let margin = (fw * style.margin_ratio) as i64;
        let inner = (fw * style.inner_padding_ratio) as u32;

        let text_w = text_width.max(0.0).ceil() as u32;
        let ascent = ascent.max(0.0).ceil() as i64;
        let descent = descent.max(0.0).ceil() as u32;
        let width = text_w + 2 * inner;
        let height = ink_height + 2 * inner + descent;

        let left = i64::from(plan.frame_width) - margin - i64::from(width);
        let top = i64::from(plan.frame_height) - margin - i64::from(height);
        let text_x = left + i64::from((width - text_w) / 2);
        let text_y = top + (i64::from(height) - ascent - i64::from(descent)).div_euclid(2);

        Self {
            left,
            top,
            width,
            height,
            text_x,
            text_y,
        }
    }
}

/// Resize `frame` to the plan's tile size and overlay the `HH:MM:SS` badge.
///
/// The result is opaque and exactly `frame_width × frame_height`. Without a shaper no badge
/// is drawn.
pub fn annotate_tile(
    frame: &RgbaImage,
    timestamp_sec: f64,
    plan: &LayoutPlan,
    style: &BadgeStyle,
    shaper: Option<&mut TextShaper>,
) -> ThumbResult<Surface> {
    let mut resized = image::imageops::resize(
        frame,
        plan.frame_width,
        plan.frame_height,
        FilterType::Lanczos3,
    );
    for px in resized.pixels_mut() {
        px.0[3] = 255;
    }
    let mut tile = Surface::from_rgba_image(&resized);

    let Some(shaper) = shaper else {
        return Ok(tile);
    };

    let label = format_timestamp(timestamp_sec);
    let shaped = shaper.shape(
        &label,
        plan.timestamp_font_size as f32,
        TextBrushRgba8::from_rgba(style.text_rgba),
    )?;
    draw_badge(&mut tile, plan, style, &shaped)?;
    Ok(tile)
}

fn draw_badge(
    tile: &mut Surface,
    plan: &LayoutPlan,
    style: &BadgeStyle,
    shaped: &ShapedText,
) -> ThumbResult<()> {
    let raster = shaped.rasterize(Slant::Upright)?;
    let ink_height = raster
        .as_ref()
        .and_then(|r| r.ink_rows())
        .map_or(0, |rows| rows.height());
    let g = BadgeGeometry::compute(
        plan,
        style,
        shaped.width(),
        ink_height,
        shaped.ascent(),
        shaped.descent(),
    );
    tile.fill_rect(g.left, g.top, g.width, g.height, style.fill_rgba);

    let Some(raster) = raster else {
        return Ok(());
    };
    // Line top sits `baseline - ascent` above the ascent box.
    let lift = (shaped.baseline() - shaped.ascent()).round() as i64;
    raster.draw(tile, g.text_x, g.text_y - lift)
}

#[cfg(test)]
#[path = "../../tests/unit/render/tile.rs"]
mod tests;
