use super::*;

#[test]
fn duration_is_derived_from_frames_and_rate() {
    let meta = VideoMetadata::new("a.mp4", 640, 360, 30.0, 300, 1);
    assert!((meta.duration_sec - 10.0).abs() < 1e-12);
}

#[test]
fn unknown_rate_yields_zero_duration() {
    let meta = VideoMetadata::new("a.mp4", 640, 360, 0.0, 300, 1);
    assert_eq!(meta.duration_sec, 0.0);
    let meta = VideoMetadata::new("a.mp4", 640, 360, f64::NAN, 300, 1);
    assert_eq!(meta.fps, 0.0);
    assert_eq!(meta.duration_sec, 0.0);
}

#[test]
fn aspect_ratio_guards_zero_height() {
    assert_eq!(
        VideoMetadata::new("a", 0, 0, 1.0, 1, 1).aspect_ratio(),
        None
    );
    let r = VideoMetadata::new("a", 1920, 1080, 1.0, 1, 1)
        .aspect_ratio()
        .unwrap();
    assert!((r - 16.0 / 9.0).abs() < 1e-12);
}
