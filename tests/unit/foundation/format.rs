use super::*;

#[test]
fn duration_drops_zero_units() {
    assert_eq!(format_duration(0.0), "0s");
    assert_eq!(format_duration(45.0), "45s");
    assert_eq!(format_duration(123.0), "2m 3s");
    assert_eq!(format_duration(3721.0), "1h 2m 1s");
    assert_eq!(format_duration(3600.0), "1h");
    assert_eq!(format_duration(3601.0), "1h 1s");
    assert_eq!(format_duration(120.0), "2m");
}

#[test]
fn duration_truncates_fractions_and_rejects_garbage() {
    assert_eq!(format_duration(59.999), "59s");
    assert_eq!(format_duration(-3.0), "0s");
    assert_eq!(format_duration(f64::NAN), "0s");
}

#[test]
fn file_size_uses_binary_prefixes() {
    assert_eq!(format_file_size(0), "0.0 B");
    assert_eq!(format_file_size(512), "512.0 B");
    assert_eq!(format_file_size(1024), "1.0 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    assert_eq!(format_file_size(2048 * 1024_u64.pow(4)), "2048.0 TB");
}

#[test]
fn timestamp_is_zero_padded_and_truncated() {
    assert_eq!(format_timestamp(0.0), "00:00:00");
    assert_eq!(format_timestamp(9.99), "00:00:09");
    assert_eq!(format_timestamp(61.5), "00:01:01");
    assert_eq!(format_timestamp(3600.0 * 12.0 + 59.0 * 60.0 + 59.9), "12:59:59");
    assert_eq!(format_timestamp(100.0 * 3600.0), "100:00:00");
}

#[test]
fn info_lines_follow_fixed_order() {
    let meta = VideoMetadata::new("clip.mp4", 1920, 1080, 29.97, 1798, 10 * 1024 * 1024);
    let lines = info_lines(&meta);
    assert_eq!(lines[0], "Filename: clip.mp4");
    assert_eq!(lines[1], "Duration: 59s");
    assert_eq!(lines[2], "Resolution: 1920x1080");
    assert_eq!(lines[3], "Frame Rate: 30.0 fps");
    assert_eq!(lines[4], "File Size: 10.0 MB");
}
