use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ThumbError::source_open("x")
            .to_string()
            .contains("source open error:")
    );
    assert!(
        ThumbError::empty_frame_set("x")
            .to_string()
            .contains("empty frame set:")
    );
    assert!(
        ThumbError::invalid_config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(ThumbError::render("x").to_string().contains("render error:"));
    assert!(ThumbError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ThumbError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
