pub mod raster;
pub mod geometry;
pub mod decompose;
pub mod output;
pub mod utils;
pub mod commands;
pub mod api;

#[cfg(test)]
mod test_utils;

pub use crate::api::RectKit;

pub use raster::{Bitmap, RectError, RectResult};
pub use geometry::{BoundingBox, Point, Rectangle, RectangleSet, Region};
pub use decompose::{DecomposerFactory, DecomposerStrategy, MaximalRectangleExtractor, QuadtreeDecomposer};
pub use output::{AnimationBuilder, SvgSerializer, SvgStyle, SvgVariant};
