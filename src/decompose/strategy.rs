//! Decomposer strategy trait definition

use crate::geometry::RectangleSet;
use crate::raster::Bitmap;

/// Strategy trait for turning a bitmap into a rectangle set
pub trait DecomposerStrategy: Send + Sync {
    /// Decompose the bitmap's foreground into rectangles
    ///
    /// The bitmap is taken by value: a decomposition owns it exclusively for
    /// its duration and may consume its content. Callers that still need the
    /// original should pass a clone.
    fn decompose(&self, bitmap: Bitmap) -> RectangleSet;

    /// Get the name of this decomposition method
    fn name(&self) -> &'static str;
}
