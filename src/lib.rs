//! thumbr renders video preview sheets: a grid of evenly spaced, timestamped frames under a
//! metadata header, with a translucent caption along the bottom, written as a single JPEG.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: open the source, probe [`VideoMetadata`], decode `rows * cols` frames
//! 2. **Layout**: derive every pixel dimension once into a [`LayoutPlan`]
//! 3. **Render**: info panel, annotated tiles (optionally in parallel) and the watermark
//! 4. **Compose**: place everything on one canvas and flatten it
//! 5. **Encode**: JPEG at quality 95, written only after every earlier stage succeeded
//!
//! Decoding goes through the system `ffprobe`/`ffmpeg` binaries (feature `media-ffmpeg`,
//! on by default). Text is shaped with `parley` and rasterized with `vello_cpu`; every
//! intermediate raster is premultiplied RGBA8.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Output encoding.
pub mod encode;
/// Errors and shared formatting.
pub mod foundation;
/// Grid configuration and layout planning.
pub mod layout;
/// Video sources and frame sampling.
pub mod media;
/// End-to-end sheet generation.
pub mod pipeline;
/// CPU rendering and composition.
pub mod render;
/// Fonts and text rendering.
pub mod text;

pub use crate::encode::jpeg::{JPEG_QUALITY, default_output_path, encode_jpeg, write_jpeg};
pub use crate::foundation::error::{ThumbError, ThumbResult};
pub use crate::foundation::format::{
    format_duration, format_file_size, format_timestamp, info_lines,
};
pub use crate::layout::grid::{DEFAULT_MAX_CANVAS_WIDTH, GridConfig};
pub use crate::layout::plan::{LayoutPlan, LayoutSettings};
pub use crate::media::decoder::{FfmpegDecoder, RawFrame, VideoDecoder, ffmpeg_tools_available};
pub use crate::media::metadata::VideoMetadata;
pub use crate::media::sampler::{SampledFrame, SampledVideo, sample_frames, sample_video};
pub use crate::pipeline::{
    RenderOpts, Stage, ThumbnailJob, ThumbnailReport, generate_default, generate_from_decoder,
    generate_thumbnail,
};
pub use crate::render::tile::BadgeStyle;
pub use crate::render::watermark::{DEFAULT_WATERMARK_ALPHA, WatermarkStyle};
pub use crate::text::fonts::{FontCandidates, FontFace, FontOrigin, FontProvider, FontRole};
