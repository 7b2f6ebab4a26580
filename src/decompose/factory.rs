//! Factory for creating decomposers

use crate::raster::errors::{RectError, RectResult};
use super::strategy::DecomposerStrategy;
use super::maximal::MaximalRectangleExtractor;
use super::quadtree::QuadtreeDecomposer;

/// Factory for creating decomposers
pub struct DecomposerFactory;

impl DecomposerFactory {
    /// Get a decomposer by name
    pub fn create(name: &str) -> RectResult<Box<dyn DecomposerStrategy>> {
        match name.to_lowercase().as_str() {
            "maximal" | "max" | "greedy" => Ok(Box::new(MaximalRectangleExtractor::new())),
            "quadtree" | "quad" => Ok(Box::new(QuadtreeDecomposer::new())),
            _ => Err(RectError::InvalidArgument(format!("Unknown decomposition method: {}", name)))
        }
    }

    /// Get all available decomposers
    pub fn get_available() -> Vec<Box<dyn DecomposerStrategy>> {
        vec![
            Box::new(MaximalRectangleExtractor::new()),
            Box::new(QuadtreeDecomposer::new()),
        ]
    }
}
