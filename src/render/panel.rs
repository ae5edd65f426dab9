//! The metadata header drawn above the grid.

use crate::{
    foundation::{error::ThumbResult, format::info_lines},
    layout::plan::LayoutPlan,
    media::metadata::VideoMetadata,
    render::surface::Surface,
    text::shape::{Slant, TextBrushRgba8, TextShaper},
};

const PANEL_BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Render the five info lines onto a white `grid_width × info_height` panel.
///
/// Line `i` starts at `(padding, padding + i * line_spacing)`. Without a shaper the panel is
/// left blank.
pub fn render_info_panel(
    meta: &VideoMetadata,
    plan: &LayoutPlan,
    shaper: Option<&mut TextShaper>,
) -> ThumbResult<Surface> {
    let mut panel = Surface::new_filled(plan.grid_width, plan.info_height, PANEL_BACKGROUND);
    let Some(shaper) = shaper else {
        return Ok(panel);
    };

    let size = plan.info_font_size as f32;
    for (i, line) in info_lines(meta).iter().enumerate() {
        let shaped = shaper.shape(line, size, TextBrushRgba8::BLACK)?;
        let y = i64::from(plan.padding) + i as i64 * i64::from(plan.line_spacing);
        shaped.draw(&mut panel, i64::from(plan.padding), y, Slant::Upright)?;
    }
    Ok(panel)
}

#[cfg(test)]
#[path = "../../tests/unit/render/panel.rs"]
mod tests;
