use std::sync::Arc;

use super::*;

fn plate_from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> Raster {
    assert_eq!(pixels.len(), (width * height) as usize);
    Raster {
        width,
        height,
        data: pixels.concat(),
        premultiplied: true,
    }
}

fn base_image(width: u32, height: u32, rgba: [u8; 4]) -> PreparedImage {
    PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba.repeat((width * height) as usize)),
    }
}

#[test]
fn threshold_is_strict_at_10() {
    let plate = plate_from_pixels(2, 1, &[[5, 5, 5, 10], [6, 6, 6, 11]]);
    let keyed = key_design_plate(&plate);

    assert_eq!(keyed.pixel(0, 0).unwrap(), [0, 0, 0, 0]);
    assert_eq!(keyed.pixel(1, 0).unwrap(), [255, 0, 255, 255]);
}

#[test]
fn keying_flattens_full_coverage_to_the_key_color() {
    let plate = plate_from_pixels(2, 1, &[[200, 30, 90, 255], [0, 0, 0, 0]]);
    let keyed = key_design_plate(&plate);

    assert_eq!(keyed.pixel(0, 0).unwrap(), KEY_RGBA8.to_u8_array());
    assert_eq!(keyed.pixel(1, 0).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn keying_leaves_the_input_plate_untouched() {
    let plate = plate_from_pixels(2, 1, &[[5, 5, 5, 10], [200, 30, 90, 255]]);
    let before = plate.clone();
    let _keyed = key_design_plate(&plate);
    assert_eq!(plate, before);
}

#[test]
fn print_guide_shares_capture_pixels() {
    let base = base_image(2, 1, [255, 255, 255, 255]);
    let plate = plate_from_pixels(2, 1, &[[200, 0, 0, 255], [0, 0, 0, 0]]);

    let out = derive_rasters(&base, &plate, MockupMode::Print).unwrap();
    assert_eq!(out.guide.data, out.capture.data);
}

#[test]
fn engrave_guide_keys_design_regions_over_the_bare_base() {
    let base = base_image(2, 1, [255, 255, 255, 255]);
    let plate = plate_from_pixels(2, 1, &[[0, 0, 0, 0], [200, 0, 0, 255]]);

    let out = derive_rasters(&base, &plate, MockupMode::Engrave).unwrap();

    // Capture keeps the design's true color; the guide keys it.
    assert_eq!(out.capture.pixel(0, 0).unwrap(), [255, 255, 255, 255]);
    assert_eq!(out.capture.pixel(1, 0).unwrap(), [200, 0, 0, 255]);
    assert_eq!(out.guide.pixel(0, 0).unwrap(), [255, 255, 255, 255]);
    assert_eq!(out.guide.pixel(1, 0).unwrap(), [255, 0, 255, 255]);
}

#[test]
fn emboss_derives_like_engrave() {
    let base = base_image(1, 1, [10, 10, 10, 255]);
    let plate = plate_from_pixels(1, 1, &[[100, 100, 100, 200]]);

    let engrave = derive_rasters(&base, &plate, MockupMode::Engrave).unwrap();
    let emboss = derive_rasters(&base, &plate, MockupMode::Emboss).unwrap();
    assert_eq!(engrave.guide.data, emboss.guide.data);
}

#[test]
fn plate_dimension_mismatch_is_a_surface_error() {
    let base = base_image(2, 2, [0, 0, 0, 255]);
    let plate = plate_from_pixels(1, 1, &[[0, 0, 0, 0]]);

    let err = derive_rasters(&base, &plate, MockupMode::Print).unwrap_err();
    assert!(matches!(err, PlatenError::Surface(_)));
}
