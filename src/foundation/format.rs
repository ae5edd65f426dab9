//! Human-readable formatting shared by the info panel and the tile badges.

use crate::media::metadata::VideoMetadata;

/// Number of lines produced by [`info_lines`].
pub const INFO_LINE_COUNT: usize = 5;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a duration as `1h 2m 1s`, dropping every zero-valued unit.
///
/// A zero duration renders as `0s`. Fractional seconds are truncated.
pub fn format_duration(seconds: f64) -> String {
    let (h, m, s) = split_hms(seconds);

    let mut parts = Vec::with_capacity(3);
    if h > 0 {
        parts.push(format!("{h}h"));
    }
    if m > 0 {
        parts.push(format!("{m}m"));
    }
    if s > 0 || parts.is_empty() {
        parts.push(format!("{s}s"));
    }
    parts.join(" ")
}

/// Format a byte count with 1024-based units and one decimal place (`1.5 MB`).
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} {}", SIZE_UNITS[SIZE_UNITS.len() - 1])
}

/// Format a timestamp as zero-padded `HH:MM:SS`, truncating every component.
pub fn format_timestamp(seconds: f64) -> String {
    let (h, m, s) = split_hms(seconds);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Metadata lines shown in the info panel, in display order.
pub fn info_lines(meta: &VideoMetadata) -> [String; INFO_LINE_COUNT] {
    [
        format!("Filename: {}", meta.filename),
        format!("Duration: {}", format_duration(meta.duration_sec)),
        format!("Resolution: {}x{}", meta.width, meta.height),
        format!("Frame Rate: {:.1} fps", meta.fps),
        format!("File Size: {}", format_file_size(meta.file_size)),
    ]
}

fn split_hms(seconds: f64) -> (u64, u64, u64) {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    (total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/format.rs"]
mod tests;
