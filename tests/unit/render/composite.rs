use super::*;

#[test]
fn over_src_transparent_is_noop() {
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
fn over_blends_premultiplied_source() {
    // Half-covering red over opaque black: alpha saturates, color is the
    // premultiplied source contribution.
    let dst = [0, 0, 0, 255];
    let src = [128, 0, 0, 128];
    assert_eq!(over(dst, src), [128, 0, 0, 255]);
}

#[test]
fn over_in_place_applies_per_pixel() {
    let mut dst = vec![0u8, 0, 0, 255, 10, 20, 30, 255];
    let src = vec![0u8, 0, 0, 0, 0, 255, 0, 255];
    over_in_place(&mut dst, &src).unwrap();
    assert_eq!(dst, vec![0, 0, 0, 255, 0, 255, 0, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());

    let mut dst = vec![0u8; 6];
    assert!(over_in_place(&mut dst, &[0u8; 6]).is_err());
}

#[test]
fn unpremultiply_restores_straight_alpha_within_rounding() {
    let straight = [200u8, 100, 40, 128];
    let premul = crate::Rgba8Premul::from_straight_rgba(
        straight[0], straight[1], straight[2], straight[3],
    );

    let mut px = premul.to_u8_array();
    unpremultiply_rgba8_in_place(&mut px);

    assert_eq!(px[3], 128);
    for i in 0..3 {
        let diff = (i16::from(px[i]) - i16::from(straight[i])).abs();
        assert!(diff <= 1, "channel {i}: {} vs {}", px[i], straight[i]);
    }
}

#[test]
fn unpremultiply_leaves_opaque_and_clear_pixels_alone() {
    let mut px = [10u8, 20, 30, 255, 0, 0, 0, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [10, 20, 30, 255, 0, 0, 0, 0]);
}
