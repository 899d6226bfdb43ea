use super::*;

fn opaque_raster(width: u32, height: u32, rgba: [u8; 4]) -> Raster {
    Raster {
        width,
        height,
        data: rgba.repeat((width * height) as usize),
        premultiplied: true,
    }
}

#[test]
fn jpeg_payload_is_self_describing() {
    let raster = opaque_raster(4, 2, [200, 10, 10, 255]);
    let encoded = encode_raster(&raster, OutputFormat::Jpeg).unwrap();

    assert_eq!(encoded.format, OutputFormat::Jpeg);
    assert_eq!(encoded.media_type(), "image/jpeg");
    assert_eq!((encoded.width, encoded.height), (4, 2));
    // JPEG SOI marker.
    assert_eq!(&encoded.bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn jpeg_payload_decodes_to_the_same_dimensions() {
    let raster = opaque_raster(6, 3, [0, 128, 255, 255]);
    let encoded = encode_raster(&raster, OutputFormat::Jpeg).unwrap();

    let decoded = image::load_from_memory(&encoded.bytes).unwrap();
    assert_eq!(decoded.width(), 6);
    assert_eq!(decoded.height(), 3);
}

#[test]
fn png_preserves_straight_alpha_within_rounding() {
    let premul = crate::Rgba8Premul::from_straight_rgba(200, 80, 40, 128);
    let raster = Raster {
        width: 1,
        height: 1,
        data: premul.to_u8_array().to_vec(),
        premultiplied: true,
    };

    let encoded = encode_raster(&raster, OutputFormat::Png).unwrap();
    assert_eq!(encoded.media_type(), "image/png");

    let decoded = image::load_from_memory(&encoded.bytes).unwrap().to_rgba8();
    let px = decoded.get_pixel(0, 0).0;
    assert_eq!(px[3], 128);
    for (i, expected) in [200u8, 80, 40].into_iter().enumerate() {
        let diff = (i16::from(px[i]) - i16::from(expected)).abs();
        assert!(diff <= 1, "channel {i}: {} vs {expected}", px[i]);
    }
}

#[test]
fn byte_len_mismatch_is_an_encode_error() {
    let raster = Raster {
        width: 2,
        height: 2,
        data: vec![0u8; 4],
        premultiplied: true,
    };
    let err = encode_raster(&raster, OutputFormat::Png).unwrap_err();
    assert!(matches!(err, PlatenError::Encode(_)));
}
