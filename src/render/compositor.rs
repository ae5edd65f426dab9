//! Final sheet assembly.

use image::RgbImage;

use crate::{
    foundation::error::{ThumbError, ThumbResult},
    layout::plan::LayoutPlan,
    render::surface::Surface,
};

const CANVAS_BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// An annotated tile and the grid cell it belongs to.
#[derive(Clone, Debug)]
pub struct PlacedTile {
    /// Row-major cell index.
    pub grid_index: usize,
    /// Tile pixels, `frame_width × frame_height`.
    pub tile: Surface,
}

/// Assemble the panel, tiles and watermark onto a white `grid_width × total_height` canvas
/// and flatten it to opaque RGB.
///
/// Tiles are placed in ascending cell order whatever order they arrive in. Cells without a
/// tile stay white.
pub fn compose_canvas(
    plan: &LayoutPlan,
    panel: &Surface,
    tiles: &[PlacedTile],
    watermark: &Surface,
) -> ThumbResult<RgbImage> {
    expect_size("info panel", panel, plan.grid_width, plan.info_height)?;
    expect_size("watermark", watermark, plan.grid_width, plan.total_height)?;

    let mut ordered: Vec<&PlacedTile> = tiles.iter().collect();
    ordered.sort_by_key(|t| t.grid_index);

    let mut canvas = Surface::new_filled(plan.grid_width, plan.total_height, CANVAS_BACKGROUND);
    canvas.draw_surface(panel, 0, 0)?;

    for placed in ordered {
        if placed.grid_index >= plan.tile_count() {
            return Err(ThumbError::render(format!(
                "tile index {} outside a {}x{} grid",
                placed.grid_index, plan.rows, plan.cols
            )));
        }
        expect_size("tile", &placed.tile, plan.frame_width, plan.frame_height)?;
        let (x, y) = plan.tile_origin(placed.grid_index);
        canvas.draw_surface(&placed.tile, i64::from(x), i64::from(y))?;
    }

    canvas.draw_surface(watermark, 0, 0)?;
    canvas.to_rgb_image([255, 255, 255])
}

fn expect_size(what: &str, s: &Surface, width: u32, height: u32) -> ThumbResult<()> {
    if (s.width(), s.height()) != (width, height) {
        return Err(ThumbError::render(format!(
            "{what} is {}x{}, plan expects {width}x{height}",
            s.width(),
            s.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
