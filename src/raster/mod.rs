//! Binary raster model
//!
//! This module provides the bitmap consumed by the decomposers and the
//! error type shared by the whole crate.

pub mod errors;
pub mod bitmap;
mod tests;

pub use errors::{RectError, RectResult};
pub use bitmap::{Bitmap, MIN_DIMENSION};
