use std::path::Path;

use crate::{
    foundation::error::{ThumbError, ThumbResult},
    media::decoder::{FfmpegDecoder, RawFrame, VideoDecoder},
    media::metadata::VideoMetadata,
};

/// One decoded sample destined for a grid cell.
#[derive(Clone, Debug)]
pub struct SampledFrame {
    /// Decoded pixels at source resolution.
    pub frame: RawFrame,
    /// Label time in seconds (`(grid_index + 1) * duration / (N + 1)`).
    pub timestamp_sec: f64,
    /// Grid cell, row-major, 0-based.
    pub grid_index: usize,
    /// Source frame index that was decoded.
    pub source_index: u64,
}

/// Result of sampling a video for an `N`-cell grid.
#[derive(Clone, Debug)]
pub struct SampledVideo {
    /// Metadata probed when the source was opened.
    pub metadata: VideoMetadata,
    /// Successfully decoded samples in grid order. May hold fewer than `requested` entries.
    pub frames: Vec<SampledFrame>,
    /// Number of cells requested (`N`).
    pub requested: usize,
}

/// Source frame indices probed for `count` samples: `i * floor(frame_count / (count + 1))`
/// for `i = 1..=count`.
pub fn sample_positions(frame_count: u64, count: usize) -> Vec<u64> {
    let interval = frame_count / (count as u64 + 1);
    (1..=count as u64).map(|i| i * interval).collect()
}

/// Label time of the `i`-th sample (1-based) out of `count`.
///
/// Derived from the total duration, not from the decoded frame position.
pub fn sample_timestamp(duration_sec: f64, count: usize, i: usize) -> f64 {
    i as f64 * duration_sec / (count as f64 + 1.0)
}

/// Open `source_path` with ffmpeg and sample `count` evenly spaced frames.
pub fn sample_video(source_path: &Path, count: usize) -> ThumbResult<SampledVideo> {
    let decoder = FfmpegDecoder::open(source_path)?;
    sample_frames(decoder, count)
}

/// Sample `count` evenly spaced frames from `decoder`.
///
/// Positions that fail to decode are skipped and leave their grid cell empty. The decoder is
/// consumed and dropped before this returns, on success and on failure.
#[tracing::instrument(skip(decoder), fields(source = %decoder.metadata().filename))]
pub fn sample_frames<D: VideoDecoder>(mut decoder: D, count: usize) -> ThumbResult<SampledVideo> {
    let metadata = decoder.metadata().clone();
    let positions = sample_positions(metadata.frame_count, count);

    let mut frames = Vec::with_capacity(count);
    for (grid_index, &source_index) in positions.iter().enumerate() {
        match decoder.decode_frame(source_index) {
            Ok(frame) => {
                tracing::debug!(grid_index, source_index, "decoded sample");
                frames.push(SampledFrame {
                    frame,
                    timestamp_sec: sample_timestamp(metadata.duration_sec, count, grid_index + 1),
                    grid_index,
                    source_index,
                });
            }
            Err(err) => {
                tracing::warn!(grid_index, source_index, %err, "skipping undecodable sample");
            }
        }
    }
    drop(decoder);

    if frames.is_empty() {
        return Err(ThumbError::empty_frame_set(format!(
            "no frames could be captured from '{}' ({count} positions probed)",
            metadata.filename
        )));
    }

    Ok(SampledVideo {
        metadata,
        frames,
        requested: count,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/media/sampler.rs"]
mod tests;
