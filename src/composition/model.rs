use crate::{
    assets::source::ImageSource,
    foundation::core::Point,
    foundation::error::{PlatenError, PlatenResult},
};

/// The on-screen editor display size placements were authored against.
///
/// Placement coordinates are meaningless without this: the engine converts
/// them to natural pixel space with independent per-axis factors
/// `canvas / viewport`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EditorViewport {
    /// Display width in editor pixels.
    pub width: f64,
    /// Display height in editor pixels.
    pub height: f64,
}

/// One design's placement in editor display coordinates.
///
/// `position` is the top-left corner of the un-rotated footprint;
/// `rotation_deg` turns the footprint clockwise (screen y-down convention)
/// about its own center. List order is paint order: later placements are
/// painted on top.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DesignPlacement {
    /// Top-left offset of the un-rotated footprint.
    pub position: Point,
    /// Footprint width in editor display pixels.
    pub width: f64,
    /// Footprint height in editor display pixels.
    pub height: f64,
    /// Clockwise rotation about the footprint center, in degrees.
    #[serde(default)]
    pub rotation_deg: f64,
}

/// Rendering intent controlling guide-image derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MockupMode {
    /// Design colors are reproduced as-is; the guide is the capture composite.
    Print,
    /// Design region is carved into the surface; the guide keys the region
    /// in solid magenta.
    Engrave,
    /// Design region is raised from the surface; keyed like engrave.
    Emboss,
}

/// A complete composition request.
///
/// Pure data, consumed once by [`crate::compose`]; nothing is retained
/// between requests.
#[derive(Clone, Debug)]
pub struct CompositionRequest {
    /// Product photograph at natural resolution; defines the output canvas.
    pub base: ImageSource,
    /// Design images in paint order.
    pub designs: Vec<ImageSource>,
    /// One placement per design image, same order.
    pub placements: Vec<DesignPlacement>,
    /// Editor display size the placements were authored against.
    pub viewport: EditorViewport,
    /// Guide derivation mode.
    pub mode: MockupMode,
}

impl CompositionRequest {
    /// Validate the caller contract, fail-fast, before any IO or decoding.
    pub fn validate(&self) -> PlatenResult<()> {
        if self.placements.len() != self.designs.len() {
            return Err(PlatenError::validation(format!(
                "expected one placement per design image: {} designs, {} placements",
                self.designs.len(),
                self.placements.len()
            )));
        }

        for (name, value) in [
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlatenError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        for (i, p) in self.placements.iter().enumerate() {
            for (name, value) in [
                ("position.x", p.position.x),
                ("position.y", p.position.y),
                ("rotation_deg", p.rotation_deg),
            ] {
                if !value.is_finite() {
                    return Err(PlatenError::validation(format!(
                        "placement {i}: {name} must be finite"
                    )));
                }
            }
            for (name, value) in [("width", p.width), ("height", p.height)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(PlatenError::validation(format!(
                        "placement {i}: {name} must be finite and >= 0"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
