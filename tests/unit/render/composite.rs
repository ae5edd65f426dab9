use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [0, 0, 0, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn black_badge_at_180_darkens_white() {
    let white = [255, 255, 255, 255];
    let badge = premultiply([0, 0, 0, 180]);
    assert_eq!(badge, [0, 0, 0, 180]);
    // 255 * (255 - 180) / 255 = 75
    assert_eq!(over(white, badge), [75, 75, 75, 255]);
}

#[test]
fn premultiply_scales_colour_channels() {
    assert_eq!(premultiply([255, 128, 0, 128]), [128, 64, 0, 128]);
    assert_eq!(premultiply([200, 200, 200, 0]), [0, 0, 0, 0]);
    assert_eq!(premultiply([1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst, &[255u8; 8]).is_ok());
    assert_eq!(dst, vec![255u8; 8]);
}

#[test]
fn flatten_premul_over_white() {
    // Premultiplied black @ 60% over white keeps 40% of the background.
    let src = vec![0u8, 0, 0, 153, 255, 0, 0, 255, 0, 0, 0, 0];
    let rgb = flatten_to_rgb8(&src, [255, 255, 255]).unwrap();
    assert_eq!(rgb, vec![102, 102, 102, 255, 0, 0, 255, 255, 255]);
}
