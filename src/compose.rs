use crate::{
    assets::source::{PreparedSources, prepare_sources},
    composition::model::{CompositionRequest, MockupMode},
    encode::raster::{EncodedImage, OutputFormat, encode_raster},
    foundation::core::Canvas,
    foundation::error::PlatenResult,
    render::guide::{ComposedRasters, derive_rasters},
    render::plate::rasterize_design_plate,
};

/// Transport-ready outputs of one composition request.
///
/// Both payloads are produced fresh per request and never cached.
#[derive(Clone, Debug)]
pub struct GenerationAssets {
    /// Flat preview composite shown for human confirmation.
    pub capture: EncodedImage,
    /// Guide payload for the mockup-generation call. Byte-identical to
    /// `capture` for [`MockupMode::Print`].
    pub guide: EncodedImage,
}

/// Run the composition pipeline down to raster pixels.
///
/// validate -> concurrent decode -> design plate -> capture/guide rasters.
/// All-or-nothing: any failure rejects the request and no partial output is
/// returned.
#[tracing::instrument(skip(request), fields(design_count = request.designs.len(), mode = ?request.mode))]
pub fn compose_rasters(request: &CompositionRequest) -> PlatenResult<ComposedRasters> {
    request.validate()?;

    let PreparedSources { base, designs } = prepare_sources(&request.base, &request.designs)?;
    let canvas = Canvas {
        width: base.width,
        height: base.height,
    };
    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        "request sources decoded"
    );

    let plate = rasterize_design_plate(canvas, &designs, &request.placements, request.viewport)?;
    derive_rasters(&base, &plate, request.mode)
}

/// Compose a request and encode both outputs for transport.
///
/// The one-shot entry point: a pure function of the request with no ambient
/// state, callable from any concurrency model. Returns JPEG payloads ready
/// for an HTTP call; for Print mode the guide payload is the capture payload
/// encoded once and reused.
pub fn compose(request: &CompositionRequest) -> PlatenResult<GenerationAssets> {
    let rasters = compose_rasters(request)?;

    let capture = encode_raster(&rasters.capture, OutputFormat::Jpeg)?;
    let guide = if request.mode == MockupMode::Print {
        capture.clone()
    } else {
        encode_raster(&rasters.guide, OutputFormat::Jpeg)?
    };

    Ok(GenerationAssets { capture, guide })
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;
