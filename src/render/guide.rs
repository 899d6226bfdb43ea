use crate::{
    assets::source::PreparedImage,
    composition::model::MockupMode,
    foundation::core::Rgba8Premul,
    foundation::error::{PlatenError, PlatenResult},
    render::composite::over_in_place,
    render::raster::Raster,
};

/// Solid key color substituted for design pixels in non-print guide modes.
pub const KEY_RGBA8: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 0,
    b: 255,
    a: 255,
};

/// Strict alpha cutoff on the 0..=255 scale: pixels with alpha above it are
/// keyed, everything at or below becomes fully transparent.
pub const KEY_ALPHA_THRESHOLD: u8 = 10;

/// Raster composites produced for one generation request.
#[derive(Clone, Debug)]
pub struct ComposedRasters {
    /// Flat preview: base photo with all designs painted on top.
    pub capture: Raster,
    /// Mode-specific guide for the mockup generator. Same pixels as
    /// `capture` for [`MockupMode::Print`].
    pub guide: Raster,
}

/// Rewrite a design plate into its keyed form.
///
/// Pure transform: returns a new buffer, the input plate is untouched, so
/// the raw plate stays usable next to its keyed variant. The hard threshold
/// discards anti-aliased fringes entirely; the downstream model reads the
/// key region as "engrave/emboss here" and partial coverage would read as
/// surface texture.
pub fn key_design_plate(plate: &Raster) -> Raster {
    let mut data = vec![0u8; plate.data.len()];
    for (dst, src) in data.chunks_exact_mut(4).zip(plate.data.chunks_exact(4)) {
        if src[3] > KEY_ALPHA_THRESHOLD {
            dst.copy_from_slice(&KEY_RGBA8.to_u8_array());
        }
    }
    Raster {
        width: plate.width,
        height: plate.height,
        data,
        premultiplied: true,
    }
}

/// Derive the capture and guide rasters for one request.
///
/// The capture composite (base photo with the plate painted on top) is
/// always computed. Print reuses it as the guide; Engrave and Emboss
/// composite the keyed plate over the bare base instead.
pub fn derive_rasters(
    base: &PreparedImage,
    plate: &Raster,
    mode: MockupMode,
) -> PlatenResult<ComposedRasters> {
    if plate.width != base.width || plate.height != base.height {
        return Err(PlatenError::surface(format!(
            "design plate {}x{} does not match base image {}x{}",
            plate.width, plate.height, base.width, base.height
        )));
    }

    let mut capture = base_raster(base);
    over_in_place(&mut capture.data, &plate.data)?;

    let guide = match mode {
        MockupMode::Print => capture.clone(),
        MockupMode::Engrave | MockupMode::Emboss => {
            let keyed = key_design_plate(plate);
            let mut guide = base_raster(base);
            over_in_place(&mut guide.data, &keyed.data)?;
            guide
        }
    };

    Ok(ComposedRasters { capture, guide })
}

fn base_raster(base: &PreparedImage) -> Raster {
    Raster {
        width: base.width,
        height: base.height,
        data: base.rgba8_premul.as_ref().clone(),
        premultiplied: true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/guide.rs"]
mod tests;
