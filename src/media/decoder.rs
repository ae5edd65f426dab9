use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{ThumbError, ThumbResult},
    media::metadata::VideoMetadata,
};

/// One decoded video frame as straight (non-premultiplied) RGBA8, row-major, tightly packed.
#[derive(Clone, Debug)]
pub struct RawFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` long.
    pub rgba8: Vec<u8>,
}

impl RawFrame {
    /// Wrap a pixel buffer, checking its length against the dimensions.
    pub fn new(width: u32, height: u32, rgba8: Vec<u8>) -> ThumbResult<Self> {
        let expected = width as usize * height as usize * 4;
        if expected == 0 || rgba8.len() != expected {
            return Err(ThumbError::render(format!(
                "raw frame {width}x{height} needs {expected} bytes, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8,
        })
    }

    /// Convert into an `image` buffer for resampling.
    pub fn into_rgba_image(self) -> ThumbResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba8)
            .ok_or_else(|| ThumbError::render("raw frame buffer does not match its dimensions"))
    }
}

/// Random-access frame source owned by the sampler for the duration of one job.
///
/// Implementations release their resources on drop.
pub trait VideoDecoder {
    /// Metadata probed when the source was opened.
    fn metadata(&self) -> &VideoMetadata;

    /// Seek to `frame_index` and decode that frame.
    fn decode_frame(&mut self, frame_index: u64) -> ThumbResult<RawFrame>;
}

/// [`VideoDecoder`] backed by the system `ffprobe` and `ffmpeg` binaries.
#[derive(Debug)]
pub struct FfmpegDecoder {
    source_path: PathBuf,
    meta: VideoMetadata,
}

impl FfmpegDecoder {
    /// Probe `source_path` and prepare it for frame extraction.
    ///
    /// Fails with [`ThumbError::SourceOpen`] when the file is missing, has no video stream
    /// or cannot be probed.
    pub fn open(source_path: &Path) -> ThumbResult<Self> {
        let file_meta = std::fs::metadata(source_path).map_err(|e| {
            ThumbError::source_open(format!(
                "could not open video file '{}': {e}",
                source_path.display()
            ))
        })?;
        if !file_meta.is_file() {
            return Err(ThumbError::source_open(format!(
                "'{}' is not a regular file",
                source_path.display()
            )));
        }

        let probe = probe(source_path)?;
        let filename = source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_path.display().to_string());
        let meta = VideoMetadata::new(
            filename,
            probe.width,
            probe.height,
            probe.fps,
            probe.frame_count,
            file_meta.len(),
        );
        tracing::debug!(?meta, "probed video source");

        Ok(Self {
            source_path: source_path.to_path_buf(),
            meta,
        })
    }

    /// Path of the opened source.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

impl VideoDecoder for FfmpegDecoder {
    fn metadata(&self) -> &VideoMetadata {
        &self.meta
    }

    fn decode_frame(&mut self, frame_index: u64) -> ThumbResult<RawFrame> {
        let time_sec = if self.meta.fps > 0.0 {
            frame_index as f64 / self.meta.fps
        } else {
            0.0
        };
        let mut rgba8 = decode_rgba8_at(&self.source_path, time_sec)?;

        let expected = self.meta.width as usize * self.meta.height as usize * 4;
        if rgba8.len() < expected || expected == 0 {
            return Err(ThumbError::render(format!(
                "ffmpeg returned {} bytes for frame {frame_index} of '{}', expected {expected}",
                rgba8.len(),
                self.source_path.display()
            )));
        }
        rgba8.truncate(expected);
        RawFrame::new(self.meta.width, self.meta.height, rgba8)
    }
}

#[derive(Debug)]
struct ProbeSummary {
    width: u32,
    height: u32,
    fps: f64,
    frame_count: u64,
}

#[cfg(feature = "media-ffmpeg")]
fn probe(source_path: &Path) -> ThumbResult<ProbeSummary> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
        avg_frame_rate: Option<String>,
        r_frame_rate: Option<String>,
        nb_frames: Option<String>,
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        #[serde(default)]
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| ThumbError::source_open(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(ThumbError::source_open(format!(
            "could not open video file '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| ThumbError::source_open(format!("ffprobe json parse failed: {e}")))?;
    let stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| {
            ThumbError::source_open(format!(
                "no video stream found in '{}'",
                source_path.display()
            ))
        })?;
    let width = stream
        .width
        .ok_or_else(|| ThumbError::source_open("missing video width from ffprobe"))?;
    let height = stream
        .height
        .ok_or_else(|| ThumbError::source_open("missing video height from ffprobe"))?;

    let fps = [&stream.avg_frame_rate, &stream.r_frame_rate]
        .into_iter()
        .filter_map(|r| r.as_deref().and_then(parse_ff_ratio))
        .find(|fps| *fps > 0.0)
        .unwrap_or(0.0);

    let duration_sec = stream
        .duration
        .as_deref()
        .or_else(|| parsed.format.as_ref().and_then(|f| f.duration.as_deref()))
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d > 0.0);
    let frame_count = stream
        .nb_frames
        .as_deref()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|n| *n > 0)
        .or_else(|| duration_sec.map(|d| (d * fps).floor() as u64))
        .unwrap_or(0);

    Ok(ProbeSummary {
        width,
        height,
        fps,
        frame_count,
    })
}

#[cfg(not(feature = "media-ffmpeg"))]
fn probe(_source_path: &Path) -> ThumbResult<ProbeSummary> {
    Err(ThumbError::source_open(
        "video decoding requires the 'media-ffmpeg' feature",
    ))
}

#[cfg(feature = "media-ffmpeg")]
fn decode_rgba8_at(source_path: &Path, time_sec: f64) -> ThumbResult<Vec<u8>> {
    let out = std::process::Command::new("ffmpeg")
        .args(["-v", "error", "-noautorotate", "-ss", &format!("{time_sec:.6}")])
        .arg("-i")
        .arg(source_path)
        .args([
            "-an",
            "-sn",
            "-frames:v",
            "1",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "pipe:1",
        ])
        .output()
        .map_err(|e| ThumbError::render(format!("failed to run ffmpeg for video decode: {e}")))?;

    if !out.status.success() {
        return Err(ThumbError::render(format!(
            "ffmpeg video decode failed for '{}' at {time_sec:.3}s: {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    Ok(out.stdout)
}

#[cfg(not(feature = "media-ffmpeg"))]
fn decode_rgba8_at(_source_path: &Path, _time_sec: f64) -> ThumbResult<Vec<u8>> {
    Err(ThumbError::render(
        "video decoding requires the 'media-ffmpeg' feature",
    ))
}

/// Return `true` when both `ffprobe` and `ffmpeg` can be invoked from `PATH`.
pub fn ffmpeg_tools_available() -> bool {
    ["ffprobe", "ffmpeg"].iter().all(|tool| {
        std::process::Command::new(tool)
            .arg("-version")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .is_ok_and(|s| s.success())
    })
}

/// Parse an ffprobe rational such as `30000/1001` into frames per second.
fn parse_ff_ratio(s: &str) -> Option<f64> {
    let (num, den) = s.split_once('/')?;
    let num = num.trim().parse::<f64>().ok()?;
    let den = den.trim().parse::<f64>().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}

#[cfg(test)]
#[path = "../../tests/unit/media/decoder.rs"]
mod tests;
