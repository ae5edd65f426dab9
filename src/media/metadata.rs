//! Source video description.

/// Immutable description of a probed video source.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    /// Base name of the source file.
    pub filename: String,
    /// Stored frame width in pixels.
    pub width: u32,
    /// Stored frame height in pixels.
    pub height: u32,
    /// Frames per second (0 when unknown).
    pub fps: f64,
    /// Total number of frames in the video stream.
    pub frame_count: u64,
    /// `frame_count / fps`, or 0 when the frame rate is unknown.
    pub duration_sec: f64,
    /// Size of the source file in bytes.
    pub file_size: u64,
}

impl VideoMetadata {
    /// Build metadata, deriving the duration from frame count and frame rate.
    pub fn new(
        filename: impl Into<String>,
        width: u32,
        height: u32,
        fps: f64,
        frame_count: u64,
        file_size: u64,
    ) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 { fps } else { 0.0 };
        let duration_sec = if fps > 0.0 {
            frame_count as f64 / fps
        } else {
            0.0
        };
        Self {
            filename: filename.into(),
            width,
            height,
            fps,
            frame_count,
            duration_sec,
            file_size,
        }
    }

    /// Source aspect ratio (`width / height`), or `None` for degenerate dimensions.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/metadata.rs"]
mod tests;
