use crate::{
    assets::source::PreparedImage,
    composition::geometry::{placement_affine, viewport_scale},
    composition::model::{DesignPlacement, EditorViewport},
    foundation::core::Canvas,
    foundation::error::{PlatenError, PlatenResult},
    render::raster::{Raster, affine_to_cpu, image_paint_from_premul, surface_dim},
};

/// Rasterize every design onto an isolated transparent plate.
///
/// The plate is sized to the natural canvas and contains nothing but the
/// painted designs. Painting is strictly in list order, so later designs end
/// up on top wherever footprints overlap; the concurrent decode that
/// produced `designs` has no influence on z-order. Zero-area placements
/// paint nothing and are not an error.
#[tracing::instrument(skip(designs, placements), fields(design_count = designs.len()))]
pub fn rasterize_design_plate(
    canvas: Canvas,
    designs: &[PreparedImage],
    placements: &[DesignPlacement],
    viewport: EditorViewport,
) -> PlatenResult<Raster> {
    if designs.len() != placements.len() {
        return Err(PlatenError::validation(format!(
            "expected one placement per design image: {} designs, {} placements",
            designs.len(),
            placements.len()
        )));
    }

    let w = surface_dim(canvas.width, "width")?;
    let h = surface_dim(canvas.height, "height")?;
    let scale = viewport_scale(canvas, viewport);

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    for (design, placement) in designs.iter().zip(placements) {
        // Degenerate footprints paint as zero area.
        if placement.width <= 0.0 || placement.height <= 0.0 {
            continue;
        }

        let paint = image_paint_from_premul(&design.rgba8_premul, design.width, design.height)?;
        let tr = placement_affine(placement, scale, design.width, design.height);

        ctx.set_transform(affine_to_cpu(tr));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(design.width),
            f64::from(design.height),
        ));
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    tracing::debug!(width = canvas.width, height = canvas.height, "design plate rasterized");

    Ok(Raster {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/plate.rs"]
mod tests;
