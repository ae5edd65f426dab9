use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    encode::jpeg::{default_output_path, write_jpeg},
    foundation::error::{ThumbError, ThumbResult},
    layout::{
        grid::GridConfig,
        plan::{LayoutPlan, LayoutSettings},
    },
    media::{
        decoder::{FfmpegDecoder, VideoDecoder},
        sampler::{SampledFrame, sample_frames},
    },
    render::{
        compositor::{PlacedTile, compose_canvas},
        panel::render_info_panel,
        tile::{BadgeStyle, annotate_tile},
        watermark::{WatermarkStyle, render_watermark},
    },
    text::{
        fonts::{FontCandidates, FontFace, FontProvider, FontRole},
        shape::TextShaper,
    },
};

/// Pipeline phases, entered strictly in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Opening the source and decoding sample frames.
    Sampling,
    /// Computing the [`LayoutPlan`].
    Layout,
    /// Rendering the panel, tiles and watermark.
    Rendering,
    /// Assembling the canvas.
    Composing,
    /// Output written.
    Encoded,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Sampling => "sampling",
            Self::Layout => "layout",
            Self::Rendering => "rendering",
            Self::Composing => "composing",
            Self::Encoded => "encoded",
        })
    }
}

/// Threading for tile annotation.
///
/// When `parallel` is set, tiles are annotated on a dedicated rayon pool (`threads` workers,
/// or rayon's default). Placement stays index-ordered either way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOpts {
    /// Annotate tiles concurrently.
    pub parallel: bool,
    /// Worker count for the parallel pool; must be `>= 1` when set.
    pub threads: Option<usize>,
}

impl RenderOpts {
    fn validate(&self) -> ThumbResult<()> {
        if self.threads == Some(0) {
            return Err(ThumbError::invalid_config("'threads' must be >= 1 when set"));
        }
        Ok(())
    }
}

/// Everything needed to produce one preview sheet.
#[derive(Clone, Debug)]
pub struct ThumbnailJob {
    /// Video to sample.
    pub input: PathBuf,
    /// Output JPEG path; `None` writes `<stem>_thumbnail.jpg` next to the input.
    pub output: Option<PathBuf>,
    /// Grid shape and maximum canvas width.
    pub grid: GridConfig,
    /// Layout constants.
    pub layout: LayoutSettings,
    /// Preferred font families.
    pub fonts: FontCandidates,
    /// Extra directories scanned for fonts in addition to the system ones.
    pub font_dirs: Vec<PathBuf>,
    /// Watermark caption and colour.
    pub watermark: WatermarkStyle,
    /// Timestamp badge appearance.
    pub badge: BadgeStyle,
    /// Tile annotation threading.
    pub render: RenderOpts,
}

impl ThumbnailJob {
    /// Job with default grid, layout, fonts and styles.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            grid: GridConfig::default(),
            layout: LayoutSettings::default(),
            fonts: FontCandidates::default(),
            font_dirs: Vec::new(),
            watermark: WatermarkStyle::default(),
            badge: BadgeStyle::default(),
            render: RenderOpts::default(),
        }
    }

    /// Where the sheet will be written.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    /// System fonts plus `font_dirs`, resolved against `fonts`.
    pub fn font_provider(&self) -> FontProvider {
        let mut provider = FontProvider::system(self.fonts.clone());
        for dir in &self.font_dirs {
            provider.load_fonts_dir(dir);
        }
        provider
    }
}

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailReport {
    /// File that was written.
    pub output_path: PathBuf,
    /// Sheet width in pixels.
    pub width: u32,
    /// Sheet height in pixels.
    pub height: u32,
    /// Grid cells (`rows * cols`).
    pub tiles_requested: usize,
    /// Tiles that were decoded and placed.
    pub tiles_rendered: usize,
}

/// Generate the preview sheet for `job.input` with the system `ffmpeg`.
///
/// The output file is written only after every stage succeeded.
#[tracing::instrument(skip(job), fields(input = %job.input.display(), grid = %job.grid))]
pub fn generate_thumbnail(job: &ThumbnailJob) -> ThumbResult<ThumbnailReport> {
    job.render.validate()?;
    tracing::info!(stage = %Stage::Sampling, "opening source");
    let decoder = FfmpegDecoder::open(&job.input)?;
    let fonts = job.font_provider();
    generate_from_decoder(decoder, job, &fonts)
}

/// Run the pipeline over an already opened decoder. The decoder is consumed and released
/// once sampling finishes.
pub fn generate_from_decoder<D: VideoDecoder>(
    decoder: D,
    job: &ThumbnailJob,
    fonts: &FontProvider,
) -> ThumbResult<ThumbnailReport> {
    job.render.validate()?;
    let output_path = job.output_path();

    tracing::info!(stage = %Stage::Sampling, tiles = job.grid.tile_count(), "sampling frames");
    let sampled = sample_frames(decoder, job.grid.tile_count())?;

    tracing::info!(stage = %Stage::Layout, "computing layout");
    let plan = LayoutPlan::compute(&sampled.metadata, &job.grid, &job.layout)?;
    tracing::debug!(?plan, "layout plan");

    tracing::info!(stage = %Stage::Rendering, frames = sampled.frames.len(), "rendering");
    let regular = fonts.resolve(FontRole::Regular);
    let italic = fonts.resolve(FontRole::Italic);

    let mut panel_shaper = shaper_for(&regular);
    let panel = render_info_panel(&sampled.metadata, &plan, panel_shaper.as_mut())?;
    let tiles = annotate_all(sampled.frames, &plan, &job.badge, &regular, &job.render)?;
    let mut watermark_shaper = shaper_for(&italic);
    let watermark = render_watermark(&plan, &job.watermark, watermark_shaper.as_mut())?;

    tracing::info!(stage = %Stage::Composing, "composing canvas");
    let canvas = compose_canvas(&plan, &panel, &tiles, &watermark)?;

    write_jpeg(&canvas, &output_path)?;
    tracing::info!(stage = %Stage::Encoded, path = %output_path.display(), "sheet written");

    Ok(ThumbnailReport {
        output_path,
        width: canvas.width(),
        height: canvas.height(),
        tiles_requested: sampled.requested,
        tiles_rendered: tiles.len(),
    })
}

fn annotate_all(
    frames: Vec<SampledFrame>,
    plan: &LayoutPlan,
    badge: &BadgeStyle,
    face: &FontFace,
    opts: &RenderOpts,
) -> ThumbResult<Vec<PlacedTile>> {
    if !opts.parallel {
        let mut shaper = shaper_for(face);
        return frames
            .into_iter()
            .map(|f| annotate_one(f, plan, badge, shaper.as_mut()))
            .collect();
    }

    let pool = build_thread_pool(opts.threads)?;
    let annotated = pool.install(|| {
        frames
            .into_par_iter()
            .map_init(
                || shaper_for(face),
                |shaper, f| annotate_one(f, plan, badge, shaper.as_mut()),
            )
            .collect::<Vec<_>>()
    });
    annotated.into_iter().collect()
}

fn annotate_one(
    sample: SampledFrame,
    plan: &LayoutPlan,
    badge: &BadgeStyle,
    shaper: Option<&mut TextShaper>,
) -> ThumbResult<PlacedTile> {
    let frame = sample.frame.into_rgba_image()?;
    let tile = annotate_tile(&frame, sample.timestamp_sec, plan, badge, shaper)?;
    Ok(PlacedTile {
        grid_index: sample.grid_index,
        tile,
    })
}

fn shaper_for(face: &FontFace) -> Option<TextShaper> {
    let err = match TextShaper::new(face) {
        Ok(shaper) => return Some(shaper),
        Err(err) => err,
    };
    tracing::warn!(family = %face.family, %err, "font could not be registered, using bundled face");
    match TextShaper::new(&FontFace::builtin()) {
        Ok(shaper) => Some(shaper),
        Err(err) => {
            tracing::warn!(%err, "bundled font could not be registered, text skipped");
            None
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> ThumbResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ThumbError::render(format!("failed to build rayon thread pool: {e}")))
}

/// Convenience wrapper: sheet for `input` written to `output` (or the default sibling path)
/// with a `ROWSxCOLS` grid.
pub fn generate_default(
    input: &Path,
    output: Option<&Path>,
    grid: &str,
) -> ThumbResult<ThumbnailReport> {
    let mut job = ThumbnailJob::new(input);
    job.output = output.map(Path::to_path_buf);
    job.grid = grid.parse()?;
    generate_thumbnail(&job)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
