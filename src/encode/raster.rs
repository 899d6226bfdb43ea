use std::io::Cursor;

use crate::{
    foundation::error::{PlatenError, PlatenResult},
    render::composite::unpremultiply_rgba8_in_place,
    render::raster::Raster,
};

/// JPEG quality used for generation payloads.
pub const JPEG_QUALITY: u8 = 90;

/// Encoded output format for transport payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputFormat {
    /// JPEG, flattened to opaque RGB. Default for HTTP transport.
    Jpeg,
    /// PNG with straight-alpha RGBA preserved.
    Png,
}

impl OutputFormat {
    /// IANA media type of a payload in this format.
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// A self-describing encoded image payload.
///
/// `bytes` is a complete image file decodable by any HTTP client; no
/// side-channel metadata is required to interpret it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// Payload encoding.
    pub format: OutputFormat,
    /// Pixel width of the encoded raster.
    pub width: u32,
    /// Pixel height of the encoded raster.
    pub height: u32,
    /// Encoded bytes.
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// IANA media type of `bytes`.
    pub fn media_type(&self) -> &'static str {
        self.format.media_type()
    }
}

/// Encode a raster into a transport payload.
pub fn encode_raster(raster: &Raster, format: OutputFormat) -> PlatenResult<EncodedImage> {
    let expected = (raster.width as usize)
        .saturating_mul(raster.height as usize)
        .saturating_mul(4);
    if raster.data.len() != expected {
        return Err(PlatenError::encode(
            "raster byte length does not match its dimensions",
        ));
    }

    let mut bytes = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            let rgb = flatten_to_rgb8(raster);
            let img = image::RgbImage::from_raw(raster.width, raster.height, rgb)
                .ok_or_else(|| PlatenError::encode("rgb buffer construction failed"))?;
            let enc = image::codecs::jpeg::JpegEncoder::new_with_quality(
                Cursor::new(&mut bytes),
                JPEG_QUALITY,
            );
            img.write_with_encoder(enc)
                .map_err(|e| PlatenError::encode(format!("encode jpeg: {e}")))?;
        }
        OutputFormat::Png => {
            let mut rgba = raster.data.clone();
            if raster.premultiplied {
                unpremultiply_rgba8_in_place(&mut rgba);
            }
            let img = image::RgbaImage::from_raw(raster.width, raster.height, rgba)
                .ok_or_else(|| PlatenError::encode("rgba buffer construction failed"))?;
            image::DynamicImage::ImageRgba8(img)
                .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
                .map_err(|e| PlatenError::encode(format!("encode png: {e}")))?;
        }
    }

    Ok(EncodedImage {
        format,
        width: raster.width,
        height: raster.height,
        bytes,
    })
}

fn flatten_to_rgb8(raster: &Raster) -> Vec<u8> {
    // Composites over an opaque base photo are opaque; un-premultiplying
    // covers any stray translucent pixel before the alpha channel is dropped.
    let mut rgba = raster.data.clone();
    if raster.premultiplied {
        unpremultiply_rgba8_in_place(&mut rgba);
    }
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}

#[cfg(test)]
#[path = "../../tests/unit/encode/raster.rs"]
mod tests;
