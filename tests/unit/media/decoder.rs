use super::*;

#[test]
fn raw_frame_checks_buffer_length() {
    assert!(RawFrame::new(2, 2, vec![0u8; 16]).is_ok());
    assert!(RawFrame::new(2, 2, vec![0u8; 15]).is_err());
    assert!(RawFrame::new(0, 2, Vec::new()).is_err());

    let img = RawFrame::new(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255])
        .unwrap()
        .into_rgba_image()
        .unwrap();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(1, 0).0, [4, 5, 6, 255]);
}

#[test]
fn ff_ratio_parses_rationals() {
    assert_eq!(parse_ff_ratio("30/1"), Some(30.0));
    let ntsc = parse_ff_ratio("30000/1001").unwrap();
    assert!((ntsc - 29.970_029_97).abs() < 1e-6);
    assert_eq!(parse_ff_ratio("0/0"), None);
    assert_eq!(parse_ff_ratio("abc"), None);
}

#[test]
fn open_missing_file_is_source_open_error() {
    let err = FfmpegDecoder::open(Path::new("target/definitely/missing.mp4")).unwrap_err();
    assert!(matches!(err, ThumbError::SourceOpen(_)), "{err:?}");
}

#[test]
fn open_non_video_file_is_source_open_error() {
    let dir = PathBuf::from("target").join("decoder_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("not_a_video.mp4");
    std::fs::write(&path, b"this is plain text, not a container").unwrap();

    let err = FfmpegDecoder::open(&path).unwrap_err();
    assert!(matches!(err, ThumbError::SourceOpen(_)), "{err:?}");
}

#[test]
fn open_directory_is_source_open_error() {
    let err = FfmpegDecoder::open(Path::new("src")).unwrap_err();
    assert!(matches!(err, ThumbError::SourceOpen(_)), "{err:?}");
}
