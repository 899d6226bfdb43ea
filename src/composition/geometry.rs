//! Viewport scaling and placement transforms.
//!
//! Every placement becomes a single analytic affine; there is no ambient
//! save/restore transform stack, so transforms cannot leak between designs
//! and the math is testable without a raster surface.

use crate::{
    composition::model::{DesignPlacement, EditorViewport},
    foundation::core::{Affine, Canvas, Point, Vec2},
};

/// Per-axis scale factors from editor display space to natural pixel space.
///
/// The axes are always independent: when the editor viewport matches the
/// base aspect ratio both factors coincide, and when it does not, each axis
/// still maps losslessly onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    /// Horizontal factor `canvas.width / viewport.width`.
    pub x: f64,
    /// Vertical factor `canvas.height / viewport.height`.
    pub y: f64,
}

/// Compute per-axis scale factors for a canvas/viewport pair.
///
/// The viewport must have been validated positive
/// ([`crate::CompositionRequest::validate`]).
pub fn viewport_scale(canvas: Canvas, viewport: EditorViewport) -> AxisScale {
    AxisScale {
        x: f64::from(canvas.width) / viewport.width,
        y: f64::from(canvas.height) / viewport.height,
    }
}

/// A placement's footprint mapped into natural pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedRegion {
    /// Scaled top-left of the un-rotated footprint.
    pub origin: Point,
    /// Scaled footprint width.
    pub width: f64,
    /// Scaled footprint height.
    pub height: f64,
}

impl PlacedRegion {
    /// Rotation pivot: the footprint center. Independent of the rotation
    /// value.
    pub fn pivot(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }
}

/// Map a placement's editor-space footprint into natural pixel space.
pub fn place(placement: &DesignPlacement, scale: AxisScale) -> PlacedRegion {
    PlacedRegion {
        origin: Point::new(
            placement.position.x * scale.x,
            placement.position.y * scale.y,
        ),
        width: placement.width * scale.x,
        height: placement.height * scale.y,
    }
}

/// Build the affine mapping a design's local pixel rect
/// `(0,0)..(design_w,design_h)` onto its placed, rotated footprint.
///
/// Canonical order (rightmost applied first):
///
/// `T(pivot) * R(rotation) * T(-pivot) * T(origin) * S(fit)`
///
/// i.e. fit-scale the design into the scaled footprint, translate it to the
/// scaled top-left, then rotate about the footprint center. Positive degrees
/// turn clockwise in y-down screen space.
pub fn placement_affine(
    placement: &DesignPlacement,
    scale: AxisScale,
    design_w: u32,
    design_h: u32,
) -> Affine {
    let region = place(placement, scale);
    let pivot = region.pivot();

    let fit_x = if design_w == 0 {
        0.0
    } else {
        region.width / f64::from(design_w)
    };
    let fit_y = if design_h == 0 {
        0.0
    } else {
        region.height / f64::from(design_h)
    };

    let t_pivot = Affine::translate(pivot.to_vec2());
    let t_unpivot = Affine::translate(-pivot.to_vec2());
    let rotate = Affine::rotate(placement.rotation_deg.to_radians());
    let t_origin = Affine::translate(Vec2::new(region.origin.x, region.origin.y));
    let fit = Affine::scale_non_uniform(fit_x, fit_y);

    t_pivot * rotate * t_unpivot * t_origin * fit
}

#[cfg(test)]
#[path = "../../tests/unit/composition/geometry.rs"]
mod tests;
