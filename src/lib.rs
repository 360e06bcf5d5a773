//! Logomark composites a raster logo onto an opaque white disk drawn on a transparent, square
//! canvas, and writes the result as a PNG.
//!
//! - Describe the output with a [`LogoSpec`] (or use [`LogoSpec::DEFAULT`] / [`LogoSpec::HEADER`])
//! - Run [`process_logo`] for the file-to-file transform, or [`composite_logo`] in memory
//! - Inspect the derived regions with [`LogoLayout::compute`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compositor;
mod effects;
mod encode;
mod foundation;
mod layout;
mod render;

pub use crate::assets::decode::{SourceImage, decode_image, load_image};
pub use crate::assets::resample::{PremulRaster, resample_square_premul};
pub use crate::compositor::{composite_logo, process_logo, process_logo_with_preset};
pub use crate::encode::png::{encode_png, save_png};
pub use crate::foundation::error::{LogomarkError, LogomarkResult};
pub use crate::layout::geometry::{
    CircleRegion, LogoLayout, LogoRegion, LogoSpec, MAX_CANVAS_SIZE,
    MAX_REGION_SCALE,
};
pub use crate::render::canvas::Canvas;
