//! Platen is a product-mockup composition engine.
//!
//! Given a product photograph, a set of transparent-background design images
//! and the placements a user authored in an on-screen editor, Platen
//! produces the two images a mockup-generation flow needs:
//!
//! 1. **Capture**: the flat preview composite a human confirms.
//! 2. **Guide**: the image handed to the downstream AI mockup generator:
//!    the capture itself for print mockups, or a magenta-keyed variant that
//!    marks the engrave/emboss region unambiguously.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: [`CompositionRequest::validate`] checks the caller
//!    contract before any IO.
//! 2. **Prepare**: [`prepare_sources`] decodes base + designs concurrently
//!    (all-or-nothing fan-in) into premultiplied RGBA8.
//! 3. **Rasterize**: [`rasterize_design_plate`] paints every design onto an
//!    isolated transparent plate, one analytic affine per placement.
//! 4. **Derive**: [`derive_rasters`] composites the capture and the
//!    mode-specific guide; [`key_design_plate`] is the alpha-key recolor.
//! 5. **Encode**: [`encode_raster`] wraps results as self-describing
//!    JPEG/PNG payloads.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure composition**: [`compose`] is a pure function of its request;
//!   each request owns its buffers and nothing persists between requests.
//! - **No IO in render stages**: reading and decoding are front-loaded in
//!   [`prepare_sources`].
//! - **Premultiplied RGBA8** end-to-end until encoding.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compose;
mod composition;
mod encode;
mod foundation;
mod render;

pub use assets::decode::decode_image;
pub use assets::source::{ImageSource, PreparedImage, PreparedSources, prepare_sources};
pub use compose::{GenerationAssets, compose, compose_rasters};
pub use composition::geometry::{AxisScale, PlacedRegion, place, placement_affine, viewport_scale};
pub use composition::model::{CompositionRequest, DesignPlacement, EditorViewport, MockupMode};
pub use encode::raster::{EncodedImage, JPEG_QUALITY, OutputFormat, encode_raster};
pub use foundation::core::{Affine, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{PlatenError, PlatenResult};
pub use render::composite::{PremulRgba8, over, over_in_place, unpremultiply_rgba8_in_place};
pub use render::guide::{
    ComposedRasters, KEY_ALPHA_THRESHOLD, KEY_RGBA8, derive_rasters, key_design_plate,
};
pub use render::plate::rasterize_design_plate;
pub use render::raster::Raster;
