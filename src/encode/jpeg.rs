//! JPEG output and output naming.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::{ExtendedColorType, ImageEncoder, RgbImage, codecs::jpeg::JpegEncoder};

use crate::foundation::error::{ThumbError, ThumbResult};

/// Encoder quality used for every sheet.
pub const JPEG_QUALITY: u8 = 95;

/// Encode `img` as JPEG entirely in memory.
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> ThumbResult<Vec<u8>> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .map_err(|e| ThumbError::encode(format!("jpeg encode failed: {e}")))?;
    Ok(bytes)
}

/// Encode `img` and write it to `path` in one call, creating parent directories.
///
/// Nothing is written unless encoding succeeded.
pub fn write_jpeg(img: &RgbImage, path: &Path) -> ThumbResult<()> {
    let bytes = encode_jpeg(img, JPEG_QUALITY)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote jpeg");
    Ok(())
}

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> ThumbResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// `<stem>_thumbnail.jpg` next to `input`, with every character of the stem that is not
/// alphanumeric or `_` replaced by `_`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut safe: String = stem
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if safe.is_empty() {
        safe.push_str("video");
    }

    let name = format!("{safe}_thumbnail.jpg");
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/jpeg.rs"]
mod tests;
