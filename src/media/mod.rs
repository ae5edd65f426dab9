//! Video sources: metadata, decoding and frame sampling.

/// Frame decoders (`ffprobe`/`ffmpeg` backed by default).
pub mod decoder;
/// Immutable description of a video source.
pub mod metadata;
/// Evenly spaced frame sampling.
pub mod sampler;
