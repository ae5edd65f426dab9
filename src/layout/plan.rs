use crate::{
    foundation::error::{ThumbError, ThumbResult},
    foundation::format::INFO_LINE_COUNT,
    layout::grid::GridConfig,
    media::metadata::VideoMetadata,
};

/// Layout constants consumed by [`LayoutPlan::compute`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSettings {
    /// Outer margin around the grid and inside the info panel.
    pub padding: u32,
    /// Gap between neighbouring tiles.
    pub spacing: u32,
    /// Info panel font size as a fraction of the grid width.
    pub info_font_ratio: f64,
    /// Extra pixels between info panel lines on top of the font size.
    pub info_line_gap: u32,
    /// Timestamp font size as a fraction of the tile width.
    pub timestamp_font_ratio: f64,
    /// Watermark font size as a fraction of the grid width.
    pub watermark_font_ratio: f64,
    /// Watermark band height as a multiple of `padding`.
    pub watermark_padding_factor: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            padding: 30,
            spacing: 20,
            info_font_ratio: 0.015,
            info_line_gap: 5,
            timestamp_font_ratio: 0.06,
            watermark_font_ratio: 0.015,
            watermark_padding_factor: 2,
        }
    }
}

/// Every pixel dimension of one preview sheet.
///
/// A plan is computed once per job and handed by reference to the panel, tile, watermark and
/// compositor stages; none of them derive sizes of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Grid rows.
    pub rows: u32,
    /// Grid columns.
    pub cols: u32,
    /// Width of one tile.
    pub frame_width: u32,
    /// Height of one tile.
    pub frame_height: u32,
    /// Canvas width: tiles, gaps and both side paddings.
    pub grid_width: u32,
    /// Height of the tile block: tiles and gaps.
    pub grid_height: u32,
    /// Height of the info panel.
    pub info_height: u32,
    /// Canvas height.
    pub total_height: u32,
    /// Outer padding.
    pub padding: u32,
    /// Gap between tiles.
    pub spacing: u32,
    /// Info panel font size in pixels.
    pub info_font_size: u32,
    /// Baseline-to-baseline distance of info panel lines.
    pub line_spacing: u32,
    /// Height reserved under the grid for the watermark.
    pub watermark_padding: u32,
    /// Tile timestamp font size in pixels.
    pub timestamp_font_size: u32,
    /// Watermark font size in pixels.
    pub watermark_font_size: u32,
}

impl LayoutPlan {
    /// Derive the full plan from source metadata and the grid configuration.
    ///
    /// Integer results are truncated, never rounded. Fails with
    /// [`ThumbError::InvalidConfig`] when any dimension would be zero or negative.
    pub fn compute(
        meta: &VideoMetadata,
        grid: &GridConfig,
        settings: &LayoutSettings,
    ) -> ThumbResult<Self> {
        let rows = i64::from(grid.rows());
        let cols = i64::from(grid.cols());
        let padding = i64::from(settings.padding);
        let spacing = i64::from(settings.spacing);

        let aspect = meta.aspect_ratio().ok_or_else(|| {
            ThumbError::invalid_config(format!(
                "source '{}' has degenerate dimensions {}x{}",
                meta.filename, meta.width, meta.height
            ))
        })?;

        let available_width =
            i64::from(grid.max_canvas_width()) - 2 * padding - spacing * (cols - 1);
        let frame_width = available_width.div_euclid(cols);
        let frame_height = (frame_width as f64 / aspect).floor() as i64;

        let grid_width = frame_width * cols + spacing * (cols - 1) + 2 * padding;
        let grid_height = frame_height * rows + spacing * (rows - 1);

        let info_font_size = ratio_floor(grid_width, settings.info_font_ratio);
        let line_spacing = info_font_size + i64::from(settings.info_line_gap);
        let info_height = line_spacing * INFO_LINE_COUNT as i64 + 2 * padding;

        let watermark_padding = padding * i64::from(settings.watermark_padding_factor);
        let total_height = grid_height + info_height + 2 * padding + watermark_padding;

        let timestamp_font_size = ratio_floor(frame_width, settings.timestamp_font_ratio);
        let watermark_font_size = ratio_floor(grid_width, settings.watermark_font_ratio);

        let dim = |name: &str, v: i64| -> ThumbResult<u32> {
            if v <= 0 {
                return Err(ThumbError::invalid_config(format!(
                    "{grid} grid at max width {} leaves {name} = {v}",
                    grid.max_canvas_width()
                )));
            }
            u32::try_from(v).map_err(|_| {
                ThumbError::invalid_config(format!("{name} = {v} exceeds u32"))
            })
        };

        Ok(Self {
            rows: grid.rows(),
            cols: grid.cols(),
            frame_width: dim("frame_width", frame_width)?,
            frame_height: dim("frame_height", frame_height)?,
            grid_width: dim("grid_width", grid_width)?,
            grid_height: dim("grid_height", grid_height)?,
            info_height: dim("info_height", info_height)?,
            total_height: dim("total_height", total_height)?,
            padding: dim("padding", padding)?,
            spacing: settings.spacing,
            info_font_size: dim("info_font_size", info_font_size)?,
            line_spacing: dim("line_spacing", line_spacing)?,
            watermark_padding: dim("watermark_padding", watermark_padding)?,
            timestamp_font_size: dim("timestamp_font_size", timestamp_font_size)?,
            watermark_font_size: dim("watermark_font_size", watermark_font_size)?,
        })
    }

    /// Number of cells in the grid.
    pub fn tile_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Top-left canvas position of the tile at `index` (row-major).
    pub fn tile_origin(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        let (row, col) = ((index / cols) as u32, (index % cols) as u32);
        (
            self.padding + col * (self.frame_width + self.spacing),
            self.info_height + row * (self.frame_height + self.spacing),
        )
    }
}

fn ratio_floor(value: i64, ratio: f64) -> i64 {
    (value as f64 * ratio).floor() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
