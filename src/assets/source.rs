use std::{
    path::PathBuf,
    sync::Arc,
};

use rayon::prelude::*;

use crate::{
    assets::decode::decode_image,
    foundation::error::{PlatenError, PlatenResult},
};

/// Prepared raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major, tightly packed.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// An opaque encoded image payload handed to the engine.
///
/// Upload flows pass bytes they already hold in memory; the CLI passes
/// filesystem paths read at prepare time. The engine only requires that the
/// payload decodes to RGBA8 pixels.
#[derive(Clone, Debug)]
pub enum ImageSource {
    /// Encoded image bytes already in memory.
    Bytes(Arc<Vec<u8>>),
    /// Encoded image file on disk.
    Path(PathBuf),
}

impl ImageSource {
    /// Wrap in-memory encoded bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(Arc::new(bytes.into()))
    }

    /// Reference an encoded image file on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    fn read(&self) -> PlatenResult<Arc<Vec<u8>>> {
        match self {
            Self::Bytes(bytes) => Ok(bytes.clone()),
            Self::Path(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    PlatenError::image_load(format!(
                        "read image bytes from '{}': {e}",
                        path.display()
                    ))
                })?;
                Ok(Arc::new(bytes))
            }
        }
    }
}

/// Decoded inputs for one composition request, indexed like the request.
#[derive(Clone, Debug)]
pub struct PreparedSources {
    /// Decoded base product photograph; defines the natural canvas.
    pub base: PreparedImage,
    /// Decoded design images in request (= paint) order.
    pub designs: Vec<PreparedImage>,
}

/// Decode the base image and every design image concurrently.
///
/// Fan-out/fan-in: all decodes must complete before any pixels are painted,
/// and a single failure rejects the whole batch with the failing source
/// named in the error. Results keep request order no matter which decode
/// finishes first.
#[tracing::instrument(skip(base, designs), fields(design_count = designs.len()))]
pub fn prepare_sources(
    base: &ImageSource,
    designs: &[ImageSource],
) -> PlatenResult<PreparedSources> {
    let (base, designs) = rayon::join(
        || prepare_one(base).map_err(|e| named(e, "base image")),
        || {
            designs
                .par_iter()
                .enumerate()
                .map(|(i, src)| prepare_one(src).map_err(|e| named(e, &format!("design image {i}"))))
                .collect::<PlatenResult<Vec<_>>>()
        },
    );

    Ok(PreparedSources {
        base: base?,
        designs: designs?,
    })
}

fn prepare_one(source: &ImageSource) -> PlatenResult<PreparedImage> {
    let bytes = source.read()?;
    decode_image(&bytes)
}

fn named(err: PlatenError, what: &str) -> PlatenError {
    match err {
        PlatenError::ImageLoad(msg) => PlatenError::image_load(format!("{what}: {msg}")),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
