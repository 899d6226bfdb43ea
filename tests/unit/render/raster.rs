use super::*;

#[test]
fn transparent_raster_is_zeroed_and_sized() {
    let r = Raster::transparent(4, 3);
    assert_eq!(r.width, 4);
    assert_eq!(r.height, 3);
    assert_eq!(r.data.len(), 4 * 3 * 4);
    assert!(r.premultiplied);
    assert!(r.data.iter().all(|&b| b == 0));
}

#[test]
fn pixel_reads_row_major() {
    let mut r = Raster::transparent(2, 2);
    r.data[(1 * 2 + 1) * 4..].copy_from_slice(&[1, 2, 3, 4]);

    assert_eq!(r.pixel(0, 0).unwrap(), [0, 0, 0, 0]);
    assert_eq!(r.pixel(1, 1).unwrap(), [1, 2, 3, 4]);
    assert_eq!(r.pixel(2, 0), None);
    assert_eq!(r.pixel(0, 2), None);
}

#[test]
fn surface_dim_rejects_u16_overflow() {
    surface_dim(65_535, "width").unwrap();
    let err = surface_dim(65_536, "width").unwrap_err();
    assert!(matches!(err, PlatenError::Surface(_)));
    assert!(err.to_string().contains("exceeds raster surface limit"));
}

#[test]
fn pixmap_rejects_byte_len_mismatch() {
    let err = pixmap_from_premul_bytes(&[0u8; 8], 2, 2).unwrap_err();
    assert!(matches!(err, PlatenError::Surface(_)));
}

#[test]
fn pixmap_round_trips_premul_bytes() {
    let bytes = [10u8, 20, 30, 40, 50, 60, 70, 80];
    let pixmap = pixmap_from_premul_bytes(&bytes, 2, 1).unwrap();
    assert_eq!(pixmap.data_as_u8_slice(), &bytes);
}
