use std::{fmt, str::FromStr};

use crate::foundation::error::{ThumbError, ThumbResult};

/// Default output width budget in pixels.
pub const DEFAULT_MAX_CANVAS_WIDTH: u32 = 1920;

/// Grid shape and width budget for one preview sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    rows: u32,
    cols: u32,
    max_canvas_width: u32,
}

impl GridConfig {
    /// Build a validated grid configuration.
    pub fn new(rows: u32, cols: u32, max_canvas_width: u32) -> ThumbResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(ThumbError::invalid_config(format!(
                "grid must have at least one row and one column (got {rows}x{cols})"
            )));
        }
        if max_canvas_width == 0 {
            return Err(ThumbError::invalid_config(
                "max canvas width must be >= 1",
            ));
        }
        Ok(Self {
            rows,
            cols,
            max_canvas_width,
        })
    }

    /// Replace the width budget, keeping the grid shape.
    pub fn with_max_canvas_width(self, max_canvas_width: u32) -> ThumbResult<Self> {
        Self::new(self.rows, self.cols, max_canvas_width)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Maximum canvas width in pixels.
    pub fn max_canvas_width(&self) -> u32 {
        self.max_canvas_width
    }

    /// Total number of cells (`rows * cols`).
    pub fn tile_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            max_canvas_width: DEFAULT_MAX_CANVAS_WIDTH,
        }
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Parses `ROWSxCOLS` (for example `3x4`) with the default width budget.
impl FromStr for GridConfig {
    type Err = ThumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        let Some((rows, cols)) = spec.split_once(['x', 'X']) else {
            return Err(ThumbError::invalid_config(format!(
                "grid spec '{spec}' must look like ROWSxCOLS"
            )));
        };
        let rows = parse_dim(spec, "rows", rows)?;
        let cols = parse_dim(spec, "cols", cols)?;
        Self::new(rows, cols, DEFAULT_MAX_CANVAS_WIDTH)
    }
}

fn parse_dim(spec: &str, what: &str, raw: &str) -> ThumbResult<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ThumbError::invalid_config(format!(
            "grid spec '{spec}': {what} '{raw}' is not a positive integer"
        )));
    }
    raw.parse::<u32>().map_err(|e| {
        ThumbError::invalid_config(format!("grid spec '{spec}': {what} '{raw}': {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
