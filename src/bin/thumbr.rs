use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "thumbr", version, about = "Render a timestamped preview sheet for a video")]
struct Cli {
    /// Input video file.
    input: PathBuf,

    /// Output JPEG path (default: `<input-stem>_thumbnail.jpg` next to the input).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Grid size as ROWSxCOLS.
    #[arg(short, long, default_value = "3x3")]
    grid: thumbr::GridConfig,

    /// Maximum sheet width in pixels.
    #[arg(long, default_value_t = thumbr::DEFAULT_MAX_CANVAS_WIDTH)]
    max_width: u32,

    /// Annotate tiles in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (default: one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Extra directory to load fonts from (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Print which font faces were resolved before rendering.
    #[arg(long)]
    dump_fonts: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thumbr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut job = thumbr::ThumbnailJob::new(&cli.input);
    job.output = cli.output;
    job.grid = cli
        .grid
        .with_max_canvas_width(cli.max_width)
        .context("invalid --max-width")?;
    job.font_dirs = cli.font_dirs;
    job.render = thumbr::RenderOpts {
        parallel: cli.parallel,
        threads: cli.threads,
    };

    if cli.dump_fonts {
        dump_font_diagnostics(&job);
    }

    let report = thumbr::generate_thumbnail(&job)
        .with_context(|| format!("generate preview sheet for '{}'", cli.input.display()))?;

    eprintln!(
        "wrote {} ({}x{}, {}/{} tiles)",
        report.output_path.display(),
        report.width,
        report.height,
        report.tiles_rendered,
        report.tiles_requested
    );
    Ok(())
}

fn dump_font_diagnostics(job: &thumbr::ThumbnailJob) {
    let provider = job.font_provider();
    eprintln!("font diagnostics ({} faces loaded):", provider.face_count());
    for role in [thumbr::FontRole::Regular, thumbr::FontRole::Italic] {
        let face = provider.resolve(role);
        eprintln!(
            "- {role:?}: family='{}' index={} italic={} origin={:?} bytes={}",
            face.family,
            face.index,
            face.italic,
            face.origin,
            face.bytes.len()
        );
    }
}
