use super::*;

#[test]
fn default_output_is_a_sanitized_sibling() {
    assert_eq!(
        default_output_path(Path::new("/videos/My Clip (2024).mp4")),
        PathBuf::from("/videos/My_Clip__2024__thumbnail.jpg")
    );
    assert_eq!(
        default_output_path(Path::new("clip.mkv")),
        PathBuf::from("clip_thumbnail.jpg")
    );
    assert_eq!(
        default_output_path(Path::new("dir/a-b.c.mov")),
        PathBuf::from("dir/a_b_c_thumbnail.jpg")
    );
    assert_eq!(
        default_output_path(Path::new("dir/under_score.mp4")),
        PathBuf::from("dir/under_score_thumbnail.jpg")
    );
}

#[test]
fn encoded_jpeg_decodes_to_same_dimensions() {
    let img = RgbImage::from_pixel(37, 21, image::Rgb([200, 30, 30]));
    let bytes = encode_jpeg(&img, JPEG_QUALITY).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (37, 21));
}

#[test]
fn write_jpeg_creates_parent_directories() {
    let root = std::env::current_dir()
        .unwrap()
        .join("target")
        .join("thumbr-unit")
        .join("write_jpeg");
    let _ = std::fs::remove_dir_all(&root);
    let path = root.join("nested").join("sheet.jpg");

    write_jpeg(&RgbImage::new(8, 8), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 2);
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}
