//! Translucent caption overlay composited over the finished sheet.

use crate::{
    foundation::error::ThumbResult,
    layout::plan::LayoutPlan,
    render::surface::Surface,
    text::shape::{Slant, TextBrushRgba8, TextShaper},
};

/// Watermark opacity, 153/255 (60%).
pub const DEFAULT_WATERMARK_ALPHA: u8 = 153;

/// Caption drawn when none is configured.
pub const DEFAULT_WATERMARK_CAPTION: &str = "Thumbr — Video Thumbnail Generator";

/// Caption text and colour of the watermark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatermarkStyle {
    /// Caption text.
    pub caption: String,
    /// Straight-alpha colour; alpha is the overlay opacity.
    pub rgba: [u8; 4],
}

impl Default for WatermarkStyle {
    fn default() -> Self {
        Self {
            caption: DEFAULT_WATERMARK_CAPTION.to_string(),
            rgba: [0, 0, 0, DEFAULT_WATERMARK_ALPHA],
        }
    }
}

/// Render the caption into a transparent `grid_width × total_height` overlay.
///
/// The caption is centred horizontally with its line box ending `watermark_padding` above
/// the bottom edge. Upright faces are sheared into an oblique.
pub fn render_watermark(
    plan: &LayoutPlan,
    style: &WatermarkStyle,
    shaper: Option<&mut TextShaper>,
) -> ThumbResult<Surface> {
    let mut overlay = Surface::new_transparent(plan.grid_width, plan.total_height);
    let Some(shaper) = shaper else {
        return Ok(overlay);
    };
    if style.caption.is_empty() {
        return Ok(overlay);
    }

    let slant = if shaper.is_italic() {
        Slant::Upright
    } else {
        Slant::Oblique
    };
    let shaped = shaper.shape(
        &style.caption,
        plan.watermark_font_size as f32,
        TextBrushRgba8::from_rgba(style.rgba),
    )?;

    let text_w = shaped.width().ceil() as i64;
    let text_h = shaped.height().ceil() as i64;
    let x = (i64::from(plan.grid_width) - text_w) / 2;
    let y = i64::from(plan.total_height) - text_h - i64::from(plan.watermark_padding);
    shaped.draw(&mut overlay, x, y, slant)?;
    Ok(overlay)
}

#[cfg(test)]
#[path = "../../tests/unit/render/watermark.rs"]
mod tests;
